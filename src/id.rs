pub trait UniqueGenerator: Default + std::fmt::Debug {
    type Output: std::fmt::Debug + Copy;

    /// Generate a unique value
    fn generate(&mut self) -> Self::Output;

    /// Start allocating again from the first value
    fn reset(&mut self);
}

/// Monotonic counter handing out node ids. Root nodes take id 0.
#[derive(Default, Debug)]
pub struct SequentialGenerator {
    next_id: u64,
}

impl SequentialGenerator {
    /// Peek at the id the next call to [`UniqueGenerator::generate`] returns
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}

impl UniqueGenerator for SequentialGenerator {
    type Output = u64;

    fn generate(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn reset(&mut self) {
        self.next_id = 0;
    }
}
