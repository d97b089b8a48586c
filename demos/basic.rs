// Example: weighted sampling by prefix-sum search, and point updates.
use bitree::Fenwick;

fn main() -> Result<(), bitree::Error> {
    let mut weights = Fenwick::<u64>::from_slice(&[5, 0, 3, 12, 1]);
    println!("prefix_sums={:?}", weights.to_vec());
    println!("total={}", weights.sum());

    // Map a ticket in [0, total) to the slot that owns it.
    for ticket in [0u64, 4, 5, 8, 20] {
        println!("ticket {ticket} -> slot {}", weights.upper_bound(ticket));
    }

    weights.add(1, 7)?;
    weights.set(3, 2)?;
    println!("after update: originals={:?}", weights.originals());
    println!("after update: prefix_sums={:?}", weights.to_vec());
    println!("first slot reaching 10: {:?}", weights.find_index(|s| *s >= 10));

    if let Err(err) = weights.add(99, 1) {
        println!("rejected: {err}");
    }
    Ok(())
}
