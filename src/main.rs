fn main() {
    if let Err(e) = brewwater_rs::adapters::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
