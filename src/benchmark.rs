//! Timing harness that drives bulk add, search, and remove cycles over a permuted key workload
//! and appends per-operation timings to CSV files.
//!
//! The harness only sees the four [`TreeOps`] entry points, so any tree flavor with the standard
//! contract can be measured. Output files are created exclusively and never overwritten; a
//! pre-existing file fails the run.

use log::warn;
use rand::Rng;
use std::cmp;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::time::Instant;

const MAX_COPRIME_TRIES: usize = 10;

/// The four entry points the harness drives, implemented once per tree flavor.
pub trait TreeOps {
    fn add(&mut self, key: u16) -> bool;
    fn search(&self, key: u16) -> bool;
    fn remove(&mut self, key: u16) -> bool;
    fn verify(&self) -> bool;
}

/// A linear-congruential permutation of the `u16` key space.
///
/// The multiplier is forced odd, so `key` is a bijection modulo 2^16: the first `n` indexes
/// always produce `n` distinct keys.
pub struct KeySequence {
    a: u16,
    b: u16,
}

impl KeySequence {
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng,
    {
        KeySequence {
            a: rng.gen::<u16>() | 1,
            b: rng.gen::<u16>(),
        }
    }

    pub fn key(&self, index: u16) -> u16 {
        self.a.wrapping_mul(index).wrapping_add(self.b)
    }
}

fn gcd(mut a: u16, mut b: u16) -> u16 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}

fn open_csv(prefix: &str, operation: &str) -> io::Result<BufWriter<File>> {
    let filename = format!("{}_{}.csv", prefix, operation);
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&filename)?;
    Ok(BufWriter::new(file))
}

/// Adds `count` permuted keys through `ops`, searching a random already-added key after each add,
/// then removes all of them in a second, unrelated permutation. Every call is timed individually
/// and appended as an `index,elapsed_seconds` row to `<prefix>_add.csv`, `<prefix>_search.csv`,
/// or `<prefix>_remove.csv`. The structure is re-verified after every mutation, outside the timed
/// window.
///
/// # Panics
/// Panics if an operation fails or `verify` reports a broken structure, since the permuted
/// workload guarantees every add and remove must succeed.
pub fn benchmark<O>(prefix: &str, count: u16, ops: &mut O) -> io::Result<()>
where
    O: TreeOps,
{
    assert!(count > 0, "the workload needs at least one key");

    let mut add_file = open_csv(prefix, "add")?;
    let mut search_file = open_csv(prefix, "search")?;
    let mut remove_file = open_csv(prefix, "remove")?;

    let mut rng = rand::thread_rng();
    let keys = KeySequence::random(&mut rng);
    let last = f64::from(cmp::max(count, 2) - 1);

    for index in 0..count {
        print!(
            "\radd and search progress: {:.1}%",
            f64::from(index) / last * 100.0
        );
        io::stdout().flush()?;

        let val = keys.key(index);
        let start = Instant::now();
        assert!(ops.add(val), "workload key {} was already present", val);
        writeln!(add_file, "{},{:.6}", index + 1, start.elapsed().as_secs_f64())?;
        assert!(ops.verify(), "structure invalid after adding {}", val);

        let probe = if index == 0 {
            val
        } else {
            keys.key(rng.gen_range(0, index))
        };
        let start = Instant::now();
        assert!(ops.search(probe), "key {} missing after insertion", probe);
        writeln!(
            search_file,
            "{},{:.6}",
            index + 1,
            start.elapsed().as_secs_f64()
        )?;
    }
    println!();

    // A second permutation over the first `count` indexes removes in an order unrelated to
    // insertion; `k` coprime with `count` makes it a bijection.
    let mut k = (rng.gen::<u16>() | 1) % count;
    let mut tries = 0;
    while gcd(k, count) != 1 && tries < MAX_COPRIME_TRIES {
        k = (rng.gen::<u16>() | 1) % count;
        tries += 1;
    }
    if gcd(k, count) != 1 {
        warn!(
            "no k coprime with {} after {} tries, removing without permutation",
            count, MAX_COPRIME_TRIES
        );
        k = 1;
    }
    let p = rng.gen_range(0, count);

    for index in 0..count {
        print!("\rremove progress: {:.1}%", f64::from(index) / last * 100.0);
        io::stdout().flush()?;

        let permuted = ((u32::from(k) * u32::from(index) + u32::from(p)) % u32::from(count)) as u16;
        let val = keys.key(permuted);

        let start = Instant::now();
        assert!(ops.remove(val), "workload key {} missing at removal", val);
        writeln!(
            remove_file,
            "{},{:.6}",
            count - index,
            start.elapsed().as_secs_f64()
        )?;
        assert!(ops.verify(), "structure invalid after removing {}", val);
    }
    println!();

    Ok(())
}
