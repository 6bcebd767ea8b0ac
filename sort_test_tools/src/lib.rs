pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;
}

pub mod patterns;
pub mod test_types;
