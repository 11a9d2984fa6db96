use tracing::debug;

pub fn greet(name: &str) -> String {
    debug!(name, "greet");
    format!("Hello, {name}!")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeter {
    greeting: String,
}

impl Greeter {
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            greeting: greeting.into(),
        }
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    pub fn greet_person(&self, name: &str) -> String {
        debug!(prefix = %self.greeting, name, "greet_person");
        format!("{}, {name}!", self.greeting)
    }
}

pub fn calculate_discount(amount: f64, percent: f64) -> f64 {
    let discount = amount * (percent / 100.0);
    debug!(amount, percent, discount, "calculate_discount");
    discount
}

pub struct ArrayProcessor;

impl ArrayProcessor {
    // Widened so no slice of i64 can overflow the total.
    pub fn sum_numbers(numbers: &[i64]) -> i128 {
        let total: i128 = numbers.iter().map(|&n| i128::from(n)).sum();
        debug!(count = numbers.len(), total, "sum_numbers");
        total
    }
}
