// Runs in its own process so no other test has touched the singletons yet.

use design_patterns::creational::singleton::{self, Counted, DoubleCheckedSingleton, EagerSingleton};

fn transcript() -> String {
    let mut out = Vec::new();
    singleton::run(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_each_singleton_is_announced_exactly_once() {
    assert_eq!(
        transcript(),
        "Testing Different Singleton Implementations:\n\
         \n\
         Eager Singleton Created!\n\
         Lazy Singleton Created!\n\
         Thread-Safe Singleton Created!\n\
         Double-Checked Singleton Created!\n\
         Bill Pugh Singleton Created!\n\
         Enum Singleton Created!\n\
         Enum Singleton Method Called!\n"
    );

    // Everything already exists on the second run.
    assert_eq!(
        transcript(),
        "Testing Different Singleton Implementations:\n\
         \n\
         Enum Singleton Method Called!\n"
    );

    assert_eq!(EagerSingleton::creations(), 1);
    assert_eq!(DoubleCheckedSingleton::creations(), 1);
}
