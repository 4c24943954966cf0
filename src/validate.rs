use crate::ast::{Node, NodeKind};
use crate::error::{Error, Result};
use crate::walker::find_by_type;

/**
 * Rejects a program containing constructs the Verilog back end does not
 * know how to lower. Lists are reported before structures.
 */
pub fn reject_unimplemented(root: &Node) -> Result<()> {
    if let Some(node) = find_by_type(root, NodeKind::List).first() {
        return Err(Error::Unsupported { pos: node.pos, what: "Lists" });
    }
    if let Some(node) = find_by_type(root, NodeKind::Structure).first() {
        return Err(Error::Unsupported { pos: node.pos, what: "Structures" });
    }
    Ok(())
}
