use rand::rngs::StdRng;

use sort_test_tools::patterns;

/// How the harness fills a sequence before handing it to a sort.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ValueDistribution {
    Fixed,
    Ascending,
    Descending,
    Random,
}

impl ValueDistribution {
    pub const ALL: [ValueDistribution; 4] = [
        ValueDistribution::Fixed,
        ValueDistribution::Ascending,
        ValueDistribution::Descending,
        ValueDistribution::Random,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ValueDistribution::Fixed => "Fixed Values",
            ValueDistribution::Ascending => "Ascending Values",
            ValueDistribution::Descending => "Descending Values",
            ValueDistribution::Random => "Random Values",
        }
    }

    pub fn generate(self, len: usize, rng: &mut StdRng) -> Vec<i32> {
        match self {
            ValueDistribution::Fixed => patterns::all_equal(len),
            ValueDistribution::Ascending => patterns::ascending(len),
            ValueDistribution::Descending => patterns::descending(len),
            // Small range on purpose, plenty of duplicates even for short inputs.
            ValueDistribution::Random => patterns::random_uniform(len, 0..100, rng),
        }
    }
}
