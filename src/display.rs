use std::fmt::Write;

use crate::noderef::NodeRef;

pub struct TreeDisplay;

impl TreeDisplay {
    /// Render the subtree below `node` as a box drawing outline, one node per line
    pub fn format<T, F>(
        node: &NodeRef<T>,
        f: &mut std::fmt::Formatter<'_>,
        data_format: F,
    ) -> std::fmt::Result
    where
        F: Fn(Option<&T>, &mut std::fmt::Formatter<'_>) -> std::fmt::Result,
    {
        // For each ancestor depth, whether a later sibling still follows and the
        // vertical rule has to continue
        let mut open: Vec<bool> = Vec::new();

        for item in node.iter_depth_first() {
            let depth = item.depth();

            if depth > 0 {
                let last = is_last_child(&item);

                open.truncate(depth - 1);
                for &rule in &open {
                    f.write_str(if rule { "┃ " } else { "  " })?;
                }

                f.write_str(if last { "┗━" } else { "┣━" })?;
                open.push(!last);
            }

            data_format(item.node().value(), f)?;
            f.write_char('\n')?;
        }

        Ok(())
    }
}

fn is_last_child<T>(node: &NodeRef<T>) -> bool {
    match node.parent() {
        Some(parent) => parent
            .node()
            .children()
            .last()
            .map(|last| last.ptr_eq(node))
            .unwrap_or(true),
        None => true,
    }
}
