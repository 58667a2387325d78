// demos/basic_usage.rs
//! Basic usage example of the stack container

use intstack::prelude::*;

fn main() -> Result<()> {
    println!("=== Reading Values ===\n");

    let mut input = "1 3 5 7 9".as_bytes();
    let mut a = Stack::with_len(5);
    let read = a.read_from(&mut input)?;

    println!("Read {} values: {}", read, a);
    println!("First: {}, last: {}", a[0], a.at(-1)?);

    println!("\n=== Copies Are Independent ===\n");

    let mut b = a.clone();
    b[4] = 0;
    println!("a = {}", a);
    println!("b = {}", b);
    println!("b contains 9: {}", b.contains(9));
    println!("b < a: {}", b < a);

    println!("\n=== Assignment and Counting ===\n");

    let mut c = Stack::new();
    c.clone_from(&b);
    c[2] = 7;
    c[1] = c[2];
    println!("c = {} (7 appears {} times)", c, c.count(7));

    println!("\n=== Move and Swap ===\n");

    let moved = c.take();
    println!("moved = {}, c is now {} with capacity {}", moved, c, c.capacity());

    let mut d = Stack::from_slice(&[100, 200]);
    d.swap(&mut b);
    println!("after swap: d = {}, b = {}", d, b);

    println!("\n=== Lookup Policies ===\n");

    println!("d.get(10)  = {} (sentinel)", d.get(10));
    println!("d.at(10)   = {} (clamped)", d.at(10)?);
    match d.get_mut(10) {
        Ok(_) => println!("unexpected"),
        Err(e) => println!("d.get_mut(10) -> {}", e),
    }

    Ok(())
}
