/// Outcome of a batch. Tournament numbers are seed-list indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub completed: Vec<u32>,
    pub failed: Vec<(u32, String)>,
}

impl Report {
    /// Process exit status: zero only if every tournament was persisted.
    pub fn status(&self) -> i32 {
        match self.failed.is_empty() {
            true => 0,
            false => 1,
        }
    }
    pub fn total(&self) -> usize {
        self.completed.len() + self.failed.len()
    }
}

impl FromIterator<Result<u32, (u32, String)>> for Report {
    fn from_iter<I: IntoIterator<Item = Result<u32, (u32, String)>>>(iter: I) -> Self {
        let mut report = Self::default();
        for outcome in iter {
            match outcome {
                Ok(number) => report.completed.push(number),
                Err(failure) => report.failed.push(failure),
            }
        }
        report
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} of {} tournaments completed",
            self.completed.len(),
            self.total()
        )?;
        for (number, reason) in self.failed.iter() {
            write!(f, "\n  tournament {} failed: {}", number, reason)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_failure_is_nonzero() {
        let ok = vec![Ok(0), Ok(1)].into_iter().collect::<Report>();
        assert_eq!(ok.status(), 0);
        let partial = vec![Ok(0), Err((1, "disk full".to_string()))]
            .into_iter()
            .collect::<Report>();
        assert_eq!(partial.status(), 1);
        assert_eq!(partial.completed, vec![0]);
        assert_eq!(partial.total(), 2);
    }
}
