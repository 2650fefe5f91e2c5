use balanced_collections::avl_tree::AvlSet;
use balanced_collections::benchmark::{benchmark, TreeOps};
use balanced_collections::red_black_tree::RedBlackSet;
use log::error;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::process;

struct AvlOps(AvlSet<u16>);

impl TreeOps for AvlOps {
    fn add(&mut self, key: u16) -> bool {
        self.0.insert(key).is_ok()
    }

    fn search(&self, key: u16) -> bool {
        self.0.contains(&key)
    }

    fn remove(&mut self, key: u16) -> bool {
        self.0.remove(&key).is_ok()
    }

    fn verify(&self) -> bool {
        self.0.is_valid()
    }
}

struct RedBlackOps(RedBlackSet<u16>);

impl TreeOps for RedBlackOps {
    fn add(&mut self, key: u16) -> bool {
        self.0.insert(key).is_ok()
    }

    fn search(&self, key: u16) -> bool {
        self.0.contains(&key)
    }

    fn remove(&mut self, key: u16) -> bool {
        self.0.remove(&key).is_ok()
    }

    fn verify(&self) -> bool {
        self.0.is_valid()
    }
}

fn usage(program: &str) -> ! {
    eprintln!(
        "Usage: {} <avl|rb> <number_of_nodes> <output_file_prefix>",
        program
    );
    process::exit(1);
}

fn main() {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("Expected logger initialization to succeed.");

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        usage(&args[0]);
    }

    let count = match args[2].parse::<u16>() {
        Ok(count) if count > 0 => count,
        _ => usage(&args[0]),
    };

    let result = match args[1].as_str() {
        "avl" => benchmark(&args[3], count, &mut AvlOps(AvlSet::new(u16::cmp))),
        "rb" => benchmark(&args[3], count, &mut RedBlackOps(RedBlackSet::new(u16::cmp))),
        _ => usage(&args[0]),
    };

    if let Err(err) = result {
        error!("benchmark failed: {}", err);
        process::exit(1);
    }
}
