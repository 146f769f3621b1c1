//! Markdown report renderer.

use crate::model::{ChangeRecord, DiffResult, NamespaceDiff};

/// Indentation applied to each diff line so the block nests under its bullet
const DIFF_INDENT: &str = "  ";

/// Render a Markdown summary of a [`DiffResult`].
///
/// Layout: one `# Namespace: <ns>` section per namespace, one `## <Kind>`
/// section per kind, one bullet per resource. Modified bullets are followed
/// by an indented ```` ```diff ```` block. The text always ends with `\n`.
pub fn render_markdown(result: &DiffResult) -> String {
    let sections: Vec<String> = result
        .namespaces()
        .iter()
        .filter(|ns| !ns.diffs.is_empty())
        .map(render_namespace)
        .collect();
    let mut out = sections.join("\n\n");
    out.push('\n');
    out
}

fn render_namespace(ns: &NamespaceDiff) -> String {
    // Kinds keep first-occurrence order, which is sorted order for grouped input
    let mut kinds: Vec<(&str, Vec<&ChangeRecord>)> = Vec::new();
    for record in &ns.diffs {
        match kinds.iter_mut().find(|(kind, _)| *kind == record.kind()) {
            Some((_, records)) => records.push(record),
            None => kinds.push((record.kind(), vec![record])),
        }
    }

    let kind_sections: Vec<String> = kinds
        .iter()
        .map(|(kind, records)| {
            let items: Vec<String> = records.iter().map(|r| render_item(r)).collect();
            format!("## {}\n\n{}", kind, items.join("\n"))
        })
        .collect();

    format!("# Namespace: {}\n\n{}", ns.namespace, kind_sections.join("\n\n"))
}

fn render_item(record: &ChangeRecord) -> String {
    let header = format!("- {}: {}", record.change_type().label(), record.name());
    match record.diff_text() {
        Some(diff_text) if !diff_text.is_empty() => {
            let body: Vec<String> = diff_text
                .split('\n')
                .map(|line| format!("{DIFF_INDENT}{line}"))
                .collect();
            format!(
                "{header}\n\n{DIFF_INDENT}```diff\n{}\n{DIFF_INDENT}```",
                body.join("\n")
            )
        }
        _ => header,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ResourceIdentity;

    fn id(kind: &str, name: &str) -> ResourceIdentity {
        ResourceIdentity::new("default", kind, name)
    }

    #[test]
    fn test_sections_per_namespace_and_kind() {
        let result = DiffResult::new(vec![NamespaceDiff {
            namespace: "default".to_string(),
            diffs: vec![
                ChangeRecord::added(&id("ConfigMap", "my-config")),
                ChangeRecord::removed(&id("ConfigMap", "your-config")),
                ChangeRecord::removed(&id("Service", "my-service")),
            ],
        }]);

        let expected = "\
# Namespace: default

## ConfigMap

- Added: my-config
- Removed: your-config

## Service

- Removed: my-service
";
        assert_eq!(render_markdown(&result), expected);
    }

    #[test]
    fn test_modified_has_indented_diff_block() {
        let result = DiffResult::new(vec![NamespaceDiff {
            namespace: "default".to_string(),
            diffs: vec![ChangeRecord::modified(
                &id("ConfigMap", "my-config"),
                " apiVersion: v1\n data:\n-  key: old-value\n+  key: new-value",
            )],
        }]);

        let expected = "\
# Namespace: default

## ConfigMap

- Modified: my-config

  ```diff
   apiVersion: v1
   data:
  -  key: old-value
  +  key: new-value
  ```
";
        assert_eq!(render_markdown(&result), expected);
    }

    #[test]
    fn test_namespaces_separated_by_blank_line() {
        let result = DiffResult::new(vec![
            NamespaceDiff {
                namespace: "default".to_string(),
                diffs: vec![ChangeRecord::removed(&id("Service", "ns-config"))],
            },
            NamespaceDiff {
                namespace: "prod".to_string(),
                diffs: vec![ChangeRecord::added(&ResourceIdentity::new(
                    "prod",
                    "Service",
                    "ns-config",
                ))],
            },
        ]);
        let md = render_markdown(&result);
        assert!(md.contains("- Removed: ns-config\n\n# Namespace: prod\n\n## Service"));
    }

    #[test]
    fn test_empty_result_is_single_newline() {
        assert_eq!(render_markdown(&DiffResult::default()), "\n");
    }
}
