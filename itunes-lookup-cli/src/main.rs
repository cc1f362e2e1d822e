use std::process;

#[tokio::main]
async fn main() {
    match itunes_lookup::cli::run().await {
        Ok(()) => {}
        Err(err) => {
            println!("{err}");
            process::exit(1);
        }
    }
}
