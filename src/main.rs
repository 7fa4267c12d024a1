use cow_trie::Trie;

fn main() {
    env_logger::init();

    println!("Copy-on-write trie demo");

    let v0: Trie = Trie::new();
    let v1 = v0.put("mobile", 10u32);
    let v2 = v1.put("mandala", 67u32);
    let v3 = v2.put("mouse", "squeak".to_string());

    // Each put produced a logically new version; earlier versions are
    // still fully usable and observe none of the later writes.
    println!("v1.get(mobile)  = {:?}", v1.get::<u32>("mobile"));
    println!("v2.get(mandala) = {:?}", v2.get::<u32>("mandala"));
    println!("v3.get(mouse)   = {:?}", v3.get::<String>("mouse"));
    println!("v1.get(mandala) = {:?} (absent in v1)", v1.get::<u32>("mandala"));

    let v4 = v3.remove("mobile");
    println!("v4.get(mobile)  = {:?} (removed)", v4.get::<u32>("mobile"));
    println!("v3.get(mobile)  = {:?} (v3 untouched)", v3.get::<u32>("mobile"));

    assert_eq!(v1.get::<u32>("mobile"), Some(&10));
    assert_eq!(v2.get::<u32>("mandala"), Some(&67));
    assert_eq!(v3.get::<String>("mouse"), Some(&"squeak".to_string()));
    assert_eq!(v1.get::<u32>("mandala"), None);
    assert_eq!(v4.get::<u32>("mobile"), None);
    assert_eq!(v3.get::<u32>("mobile"), Some(&10));

    println!("all invariants held");
}
