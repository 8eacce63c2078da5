use std::fmt::{Display, Write};

use crate::access::TreeNode;

/// Render the subtree rooted at `n` as a Graphviz digraph.
///
/// `fill` selects the fill colour for each node, letting callers surface
/// per-discipline tags (such as red-black node colours) in the output.
pub(crate) fn print_dot<N, F>(n: &N, fill: F) -> String
where
    N: TreeNode,
    N::Key: Display,
    F: Fn(&N) -> &'static str,
{
    let mut buf = String::new();

    writeln!(buf, "digraph {{").unwrap();
    writeln!(buf, r#"bgcolor = "transparent";"#).unwrap();
    writeln!(buf, r#"node [shape = record; style = filled; fontcolor = white;];"#).unwrap();
    recurse(n, &fill, &mut buf);
    writeln!(buf, "}}").unwrap();

    buf
}

fn recurse<N, F, W>(n: &N, fill: &F, buf: &mut W)
where
    N: TreeNode,
    N::Key: Display,
    F: Fn(&N) -> &'static str,
    W: Write,
{
    writeln!(buf, r#""{}" [fillcolor = {};];"#, n.key(), fill(n)).unwrap();

    for v in [n.left(), n.right()] {
        match v {
            Some(v) => {
                writeln!(buf, "\"{}\" -> \"{}\";", n.key(), v.key()).unwrap();
                recurse(v, fill, buf);
            }
            None => {
                writeln!(buf, "\"null_{}\" [shape=point,style=invis];", n.key()).unwrap();
                writeln!(buf, "\"{}\" -> \"null_{}\" [style=invis];", n.key(), n.key()).unwrap();
            }
        };
    }
}
