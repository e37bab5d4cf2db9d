use fibonacci_rs::{first_u64, Fibonacci};

fn main() {
    println!("Fibonacci sequence (first 10 numbers):");
    for (i, value) in Fibonacci::new().take(10).enumerate() {
        println!("value {} = {}", i + 1, value);
    }

    println!("\nlarger values:");
    if let Some(value) = Fibonacci::new().nth(99) {
        println!("value 100 = {}", value);
    }

    match first_u64(100) {
        Ok(values) => println!("all 100 values fit in u64 ({} drawn)", values.len()),
        Err(e) => println!("narrowing to u64: {}", e),
    }
}
