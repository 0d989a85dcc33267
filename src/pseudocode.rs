//! Fixed pseudocode listings
//!
//! A step's `highlight_line` is a 0-based index into the listing of the
//! operation that produced it.

/// Exact search
pub const SEARCH: &[&str] = &[
    "if this == null",
    "    return null",
    "else if this.key == search value",
    "    return this",
    "else if this.key < search value",
    "    search right",
    "else search left",
];

/// Lower bound (smallest key >= v)
pub const LOWER_BOUND: &[&str] = &[
    "result = null",
    "if this == null",
    "    return result",
    "else if this.key >= search value",
    "    result = this.key",
    "    search left (try smaller)",
    "else search right",
];

/// Min and max (target child = left for min, right for max)
pub const MIN_MAX: &[&str] = &[
    "if this == null",
    "    return null",
    "else if target child == null",
    "    return this",
    "else go to target child",
];

/// Insert
pub const INSERT: &[&str] = &[
    "if this == null",
    "    create new node",
    "else if value < this.key",
    "    insert to left subtree",
    "else if value > this.key",
    "    insert to right subtree",
    "else duplicate — ignore",
];

/// Remove (successor-based two-children case)
pub const REMOVE: &[&str] = &[
    "if this == null",
    "    return null           // not found",
    "else if this.key < v",
    "    this.right = remove(right, v)",
    "else if this.key > v",
    "    this.left = remove(left, v)",
    "else                      // found node",
    "    if leaf: just delete",
    "    if one child: bypass",
    "    if two children:",
    "      find successor, swap, remove",
];

/// In-order predecessor
pub const PREDECESSOR: &[&str] = &[
    "search for node with value v",
    "if node has left subtree",
    "    predecessor = max of left subtree",
    "else predecessor = last right-turn ancestor",
    "return predecessor",
];

/// In-order successor
pub const SUCCESSOR: &[&str] = &[
    "search for node with value v",
    "if node has right subtree",
    "    successor = min of right subtree",
    "else successor = last left-turn ancestor",
    "return successor",
];

/// k-th smallest
pub const SELECT: &[&str] = &[
    "function select(node, k)",
    "    leftSize = size(node.left)",
    "    if k <= leftSize",
    "        return select(node.left, k)",
    "    else if k == leftSize + 1",
    "        return node  // found k-th",
    "    else select(node.right, k-leftSize-1)",
];

/// In-order traversal (visit on line 3)
pub const INORDER: &[&str] = &[
    "function inorder(node)",
    "    if node == null: return",
    "    inorder(node.left)",
    "    visit(node)",
    "    inorder(node.right)",
];

/// Pre-order traversal (visit on line 2)
pub const PREORDER: &[&str] = &[
    "function preorder(node)",
    "    if node == null: return",
    "    visit(node)",
    "    preorder(node.left)",
    "    preorder(node.right)",
];

/// Post-order traversal (visit on line 4)
pub const POSTORDER: &[&str] = &[
    "function postorder(node)",
    "    if node == null: return",
    "    postorder(node.left)",
    "    postorder(node.right)",
    "    visit(node)",
];

/// Every listing with its name, in menu order
pub const ALL: &[(&str, &[&str])] = &[
    ("search", SEARCH),
    ("lower-bound", LOWER_BOUND),
    ("min-max", MIN_MAX),
    ("insert", INSERT),
    ("remove", REMOVE),
    ("predecessor", PREDECESSOR),
    ("successor", SUCCESSOR),
    ("select", SELECT),
    ("inorder", INORDER),
    ("preorder", PREORDER),
    ("postorder", POSTORDER),
];

/// Look up a listing by name
pub fn listing(name: &str) -> Option<&'static [&'static str]> {
    ALL.iter()
        .find(|(listed, _)| *listed == name)
        .map(|(_, lines)| *lines)
}
