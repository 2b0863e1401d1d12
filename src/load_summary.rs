use std::ops::AddAssign;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub num_files: usize,
    pub num_records: usize,
}

impl LoadSummary {
    pub fn new() -> LoadSummary {
        LoadSummary {
            num_files: 0,
            num_records: 0,
        }
    }

    pub fn for_file(num_records: usize) -> LoadSummary {
        LoadSummary {
            num_files: 1,
            num_records,
        }
    }
}

impl AddAssign for LoadSummary {
    fn add_assign(&mut self, other: Self) {
        self.num_files += other.num_files;
        self.num_records += other.num_records;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_file_counts_add_up() {
        let mut summary = LoadSummary::new();
        summary += LoadSummary::for_file(3);
        summary += LoadSummary::for_file(0);
        summary += LoadSummary::for_file(2);
        assert_eq!(
            summary,
            LoadSummary {
                num_files: 3,
                num_records: 5,
            }
        );
    }
}
