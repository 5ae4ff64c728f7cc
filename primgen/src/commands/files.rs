use crate::cli::Roots;
use anyhow::Context;
use primgen_core::Registry;
use std::io::Write;

/// Prints the template inputs and generated outputs of the selected plan,
/// one sorted path per line.
///
/// With neither flag set, inputs are listed before outputs.
///
/// # Errors
/// Fails if the writer fails.
pub fn files(
    roots: &Roots,
    inputs: bool,
    outputs: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let task = roots.plan.build(Registry::standard());
    let both = !inputs && !outputs;

    if inputs || both {
        for path in task.input_files(&roots.templates) {
            writeln!(out, "{}", path.display()).context("failed to write input list")?;
        }
    }
    if outputs || both {
        for path in task.output_files(&roots.output) {
            writeln!(out, "{}", path.display()).context("failed to write output list")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Plan;
    use std::path::PathBuf;

    fn roots(plan: Plan) -> Roots {
        Roots {
            templates: PathBuf::from("tpl"),
            output: PathBuf::from("out"),
            plan,
        }
    }

    fn lines(buf: &[u8]) -> Vec<String> {
        String::from_utf8(buf.to_vec())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_outputs_are_sorted_and_complete() {
        let mut buf = Vec::new();
        files(&roots(Plan::CollectionPrimitive), false, true, &mut buf).unwrap();
        let listed = lines(&buf);

        assert_eq!(listed.len(), 377);
        let mut sorted = listed.clone();
        sorted.sort();
        assert_eq!(listed, sorted);
        assert!(listed.iter().all(|l| l.starts_with("out") && l.ends_with(".java")));
    }

    #[test]
    fn test_inputs_are_deduplicated_templates() {
        let mut buf = Vec::new();
        files(&roots(Plan::CollectionPrimitive), true, false, &mut buf).unwrap();
        let listed = lines(&buf);

        assert!(listed.len() < 377);
        assert!(listed.iter().all(|l| l.ends_with(".java.ftl")));
        let expected = PathBuf::from("tpl")
            .join("kala/collection/primitive/PrimitiveSeq.java.ftl")
            .display()
            .to_string();
        assert!(listed.contains(&expected));
    }

    #[test]
    fn test_no_flag_lists_both() {
        let mut both = Vec::new();
        files(&roots(Plan::Base), false, false, &mut both).unwrap();
        let mut inputs = Vec::new();
        files(&roots(Plan::Base), true, false, &mut inputs).unwrap();
        let mut outputs = Vec::new();
        files(&roots(Plan::Base), false, true, &mut outputs).unwrap();

        assert_eq!(lines(&both).len(), lines(&inputs).len() + lines(&outputs).len());
    }
}
