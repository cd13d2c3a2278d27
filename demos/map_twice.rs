//! Maps a function over a zero-padded array and prints the result.
//!
//! Run with `cargo run --example map_twice`. Prints 2, 4, 6, 0 and 0, one
//! per line.

use beautiful::shorthand::array::array;
use beautiful::shorthand::pfun::pfun;
use beautiful::shorthand::ptr::Ptr as Pointer;

fn map<T: Copy>(f: pfun![T, T], items: &array![T]) -> Box<array![T]> {
    items.iter().map(|&item| f(item)).collect()
}

fn twice(x: i32) -> i32 {
    2 * x
}

fn main() {
    let mut xs: array![i32; 5] = [0; 5];
    xs[..3].copy_from_slice(&[1, 2, 3]);

    let doubled = map::<i32>(twice, &xs);

    let first: Pointer<i32> = doubled.as_ptr().cast_mut();
    // SAFETY: `doubled` holds five elements and outlives `first`.
    assert_eq!(unsafe { *first }, 2);

    for x in doubled.iter() {
        println!("{x}");
    }
}
