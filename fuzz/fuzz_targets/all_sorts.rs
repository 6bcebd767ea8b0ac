#![no_main]

use libfuzzer_sys::fuzz_target;

use classic_sorts::registry;

#[path = "../src/util.rs"]
mod util;

fuzz_target!(|data: &[u8]| {
    let input = util::u8_as_i32(data);

    let mut expected = input.clone();
    expected.sort();

    for algorithm in registry::algorithms::<i32>() {
        if algorithm.is_quadratic() && input.len() > 4096 {
            continue;
        }

        let mut v = input.clone();
        algorithm.run(&mut v);

        assert_eq!(v, expected, "{} disagrees with slice::sort", algorithm.name);
    }
});
