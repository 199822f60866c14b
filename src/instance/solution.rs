use super::*;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// The result of a solver: for every item whether it is selected, together with the total value
/// and cost of the selection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Solution<N> {
    selected: Vec<bool>,
    value: N,
    cost: N,
}

impl<N: Number> Solution<N> {
    pub fn new(selected: Vec<bool>, value: N, cost: N) -> Self {
        Self {
            selected,
            value,
            cost,
        }
    }

    pub fn selected(&self) -> &[bool] {
        &self.selected
    }

    pub fn value(&self) -> N {
        self.value
    }

    pub fn cost(&self) -> N {
        self.cost
    }

    /// Returns the pair by which solutions of different solvers are compared; the selection
    /// itself may differ if several optima have the same value and cost.
    pub fn objective(&self) -> (N, N) {
        (self.value, self.cost)
    }

    /// Returns an iterator over the (0-based) indices of the selected items.
    ///
    /// # Example
    /// ```
    /// use knapsack_bb::instance::Solution;
    /// let solution = Solution::new(vec![true, false, true], 7, 4);
    /// assert_eq!(solution.selected_items().collect::<Vec<_>>(), vec![0, 2]);
    /// ```
    pub fn selected_items(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected
            .iter()
            .enumerate()
            .filter_map(|(i, &s)| s.then_some(i))
    }

    pub fn number_of_selected_items(&self) -> usize {
        self.selected.iter().filter(|&&s| s).count()
    }

    /// Writes the solution in text form: a line `s <value> <cost> <k>` followed by the
    /// 1-based indices of the `k` selected items, one per line.
    ///
    /// ```
    /// use knapsack_bb::instance::Solution;
    /// let solution = Solution::new(vec![false, true, false, true], 9, 5);
    ///
    /// let mut buffer: Vec<u8> = Vec::new(); // implements Write
    /// solution.write(&mut buffer).unwrap();
    /// assert_eq!(buffer, b"s 9 5 2\n2\n4\n");
    /// ```
    pub fn write<W: Write>(&self, mut writer: W) -> anyhow::Result<()> {
        writeln!(
            &mut writer,
            "s {} {} {}",
            self.value,
            self.cost,
            self.number_of_selected_items()
        )?;
        for i in self.selected_items() {
            writeln!(&mut writer, "{}", i + 1)?;
        }
        Ok(())
    }
}

impl<N: Number + Serialize> Solution<N> {
    /// Writes the solution as a single JSON object followed by a newline.
    pub fn write_json<W: Write>(&self, mut writer: W) -> anyhow::Result<()> {
        serde_json::to_writer(&mut writer, self)?;
        writeln!(&mut writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_solution() {
        let solution = Solution::<i64>::new(Vec::new(), 0, 0);

        let mut buffer: Vec<u8> = Vec::new();
        solution.write(&mut buffer).unwrap();
        assert_eq!(buffer, b"s 0 0 0\n");
    }

    #[test]
    fn json_output() {
        let solution = Solution::new(vec![true, false], 10u32, 5u32);

        let mut buffer: Vec<u8> = Vec::new();
        solution.write_json(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "{\"selected\":[true,false],\"value\":10,\"cost\":5}\n"
        );

        let parsed: Solution<u32> = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(parsed, solution);
    }
}
