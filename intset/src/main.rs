extern crate intset;
extern crate tracing;
extern crate tracing_subscriber;

use intset::ops::{add, difference, intersection, print_set, release, size};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    assert!(
        args.len() <= 2,
        "At most one argument, the log level, may be provided!"
    );

    let level = if args.len() == 2 {
        match &args[1][..] {
            "-info" => Level::INFO,
            "-debug" => Level::DEBUG,
            "-trace" => Level::TRACE,
            _ => panic!("Invalid log level provided: {}", args[1]),
        }
    } else {
        Level::INFO
    };

    FmtSubscriber::builder().with_max_level(level).init();

    debug!("Building the demonstration sets.");

    let mut s1 = None;
    s1 = add(s1, 10);
    s1 = add(s1, 20);
    s1 = add(s1, 30);
    s1 = add(s1, 40);
    print_set(s1.as_ref());

    let mut s2 = None;
    s2 = add(s2, 10);
    s2 = add(s2, 30);
    s2 = add(s2, 50);
    s2 = add(s2, 70);
    print_set(s2.as_ref());

    println!("total elems in set1: {}", size(s1.as_ref()));
    println!("total elems in set2: {}", size(s2.as_ref()));

    let s3 = intersection(s1.as_ref(), s2.as_ref());
    print_set(s3.as_ref());
    println!("total elems in set3: {}", size(s3.as_ref()));

    let s4 = difference(s1.as_ref(), s2.as_ref());
    println!("total elems in set4: {}", size(s4.as_ref()));
    print_set(s4.as_ref());

    let s5 = difference(s2.as_ref(), s1.as_ref());
    println!("total elems in set5: {}", size(s5.as_ref()));
    print_set(s5.as_ref());

    release(s1);
    release(s2);
    release(s3);
    release(s4);
    release(s5);
}
