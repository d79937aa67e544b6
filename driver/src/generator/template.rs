use crate::workflow::config::CaseConfig;
use matmulcore::DimensionTriple;

/// Built-in cases covering well-formed products and deliberately wrong declared shapes.
pub fn reference_cases() -> Vec<CaseConfig> {
    let a = vec![vec![1, 2, 3], vec![4, 5, 6]];
    let b = vec![vec![7, 8], vec![9, 10], vec![11, 12]];
    let mut b_extra_row = b.clone();
    b_extra_row.push(vec![13, 14]);

    vec![
        CaseConfig::new("rectangular", a.clone(), b.clone(), Some((2, 3, 2).into())),
        CaseConfig::new("rows-a-wrong", a.clone(), b.clone(), Some((1, 3, 2).into())),
        CaseConfig::new("inner-dim-wrong", a.clone(), b.clone(), Some((2, 1, 2).into())),
        CaseConfig::new("rows-b-wrong", a, b_extra_row, Some((2, 4, 1).into())),
        CaseConfig::new(
            "large-number",
            vec![vec![1_000_000, 0], vec![1, -1], vec![4, 5]],
            vec![vec![1, 0], vec![1, -1]],
            Some(DimensionTriple::new(3, 2, 2)),
        ),
        CaseConfig::new(
            "non-commutative",
            vec![vec![1, 0], vec![1, -1]],
            vec![vec![1, 2], vec![2, 4]],
            None,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_cases_have_unique_names() {
        let cases = reference_cases();
        let mut names: Vec<_> = cases.iter().map(|case| case.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), cases.len());
    }
}
