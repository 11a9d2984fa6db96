mod greeter;

use anyhow::anyhow;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use greeter::{calculate_discount, greet, ArrayProcessor, Greeter};

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    run_greeting_examples();

    let discount = calculate_discount(200.0, 15.0);
    println!("{:?}", discount);

    let numbers = vec![1, 2, 3, 4, 5];
    let total = ArrayProcessor::sum_numbers(&numbers);
    println!("{}", total);

    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}

fn run_greeting_examples() {
    let message = greet("World");
    println!("{}", message);

    let greeter = Greeter::new("Hi");
    debug!(prefix = greeter.greeting(), "built greeter");
    let message = greeter.greet_person("Alice");
    println!("{}", message);
}
