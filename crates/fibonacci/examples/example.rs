use fibonacci_rs::{format_sequence, generate, term, MAX_TERMS};

fn main() -> fibonacci_rs::Result<()> {
    println!("Fibonacci sequence (first 10 numbers):");
    println!("{}", format_sequence(&generate(10)?));

    println!("\nlarger values:");
    for index in [20, 30, 40, MAX_TERMS as i64 - 1] {
        println!("term({}) = {}", index, term(index)?);
    }

    match generate(MAX_TERMS as i64 + 1) {
        Ok(_) => println!("\nunexpected success"),
        Err(e) => println!("\ngenerate({}) -> {}", MAX_TERMS + 1, e),
    }
    Ok(())
}
