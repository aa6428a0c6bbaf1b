use std::process;

#[tokio::main]
async fn main() {
  env_logger::init();

  if let Err(error) = css_reminder::run().await {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
