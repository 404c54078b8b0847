use crate::compiler::ast::statement::Statement;

/**
Performs a Pre Order traversal of a statement tree.  This construct exists to
allow a user to easily traverse through the body of a procedure using `for`
loops, e.g. to find every call statement no matter how deeply it is nested
within `if` and `while` statements. Using this iterator will transform the
tree into an ordered list of statements and does not preserve its topology.
*/
pub struct PreOrderIter<'a> {
    out: Vec<&'a Statement>,
}

impl<'a> PreOrderIter<'a> {
    /**
    Create a new Iterator which will perform a PreOrder DFS traversal of a
    statement tree starting at the given statement as its root.
    */
    pub fn new(node: &'a Statement) -> PreOrderIter<'a> {
        let mut stack = vec![node];
        let mut out = vec![];

        while let Some(n) = stack.pop() {
            out.push(n);
            let children = n.children().into_iter().rev();
            for c in children {
                stack.push(c);
            }
        }

        out.reverse();

        PreOrderIter { out }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a Statement;

    fn next(&mut self) -> Option<Self::Item> {
        self.out.pop()
    }
}
