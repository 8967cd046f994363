use prngs::mt::Mt19937;
use prngs::GeneratorSet;

const DEMO_SEED: i64 = 125;
const DEMO_ITERATIONS: usize = 50;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() >= 2 && (args[1] == "--help" || args[1] == "-h" || args[1] == "help") {
        print_help();
        return;
    }
    if args.len() >= 2 && args[1] == "mt" {
        run_mt_demo();
        return;
    }

    if args.len() >= 2 {
        eprintln!("Unknown command: {}", args[1]);
        print_help();
        std::process::exit(2);
    }

    // One value of each generator per iteration, then a separator.
    let mut r = GeneratorSet::new(Some(DEMO_SEED), None);
    for _ in 0..DEMO_ITERATIONS {
        println!("lcg: {}", r.next_lcg());
        println!("bbs: {}", r.next_bbs());
        println!("mwc: {}", r.next_mwc());
        println!("xor: {}", r.next_xorshift());
        println!("***********");
    }
}

fn print_help() {
    println!("prngs (LCG / Blum-Blum-Shub / multiply-with-carry / xorshift demo)");
    println!("usage:");
    println!("  cargo run");
    println!("  cargo run -- mt");
    println!("  cargo run -- --help");
}

// Reference output of the Mersenne Twister key initialization, five values per line.
fn run_mt_demo() {
    let mut mt = match Mt19937::from_key(&[0x123, 0x234, 0x345, 0x456]) {
        Ok(mt) => mt,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    for i in 0..10 {
        print!("{} ", mt.next_u31());
        if i % 5 == 4 {
            println!();
        }
    }
    println!();
    for i in 0..10 {
        print!("{} ", mt.next_f64());
        if i % 5 == 4 {
            println!();
        }
    }
}
