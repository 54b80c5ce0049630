/// One of the six operator symbols admitted by the grammar.
///
/// The grammar accepts all six symbols, but only `+`, `-`, `*` and `/` have
/// arithmetic meaning. `%` and `^` parse successfully and are rejected by the
/// evaluator with an invalid operator error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Rem,
    /// `^`
    Pow,
}

impl Operator {
    /// Every operator in the order the grammar lists them.
    pub const ALL: [Self; 6] = [Self::Add, Self::Sub, Self::Mul, Self::Div, Self::Rem, Self::Pow];

    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Rem => '%',
            Self::Pow => '^',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An operator applied to one or more operands.
///
/// The first operand is stored separately so that an expression without
/// operands cannot be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    /// The operator folded across the operands.
    pub operator: Operator,
    /// The mandatory first operand; it seeds the fold.
    pub first:    Box<Node>,
    /// The remaining operands, in source order.
    pub rest:     Vec<Node>,
}

impl Expression {
    /// Creates an expression from its operator and operands.
    #[must_use]
    pub fn new(operator: Operator, first: Node, rest: Vec<Node>) -> Self {
        Self { operator,
               first: Box::new(first),
               rest }
    }

    /// Iterates over all operands, first one included.
    pub fn operands(&self) -> impl Iterator<Item = &Node> {
        std::iter::once(self.first.as_ref()).chain(self.rest.iter())
    }

    /// Number of operands of this expression, always at least one.
    #[must_use]
    pub fn arity(&self) -> usize {
        1 + self.rest.len()
    }
}

/// A node of the syntax tree.
///
/// The tree is owned and immutable once built: every node belongs to exactly
/// one parent and there is no sharing between lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A numeric literal kept as raw source text, e.g. `42` or `-7`.
    ///
    /// Conversion to an integer is left to the evaluator, which reports
    /// literals outside the `i64` range as invalid numbers.
    Number {
        /// The digits, with an optional leading `-`.
        text: String,
    },
    /// A parenthesized group, or the whole program.
    Expression(Expression),
}

impl Node {
    /// Creates a number leaf from its source text.
    pub fn number(text: impl Into<String>) -> Self {
        Self::Number { text: text.into() }
    }

    /// Total number of nodes in the tree: number leaves plus expressions.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.leaf_count() + self.branch_count()
    }

    /// Number of numeric literals in the tree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Number { .. } => 1,
            Self::Expression(expr) => expr.operands().map(Self::leaf_count).sum(),
        }
    }

    /// Number of expressions (operator applications) in the tree.
    #[must_use]
    pub fn branch_count(&self) -> usize {
        match self {
            Self::Number { .. } => 0,
            Self::Expression(expr) => 1 + expr.operands().map(Self::branch_count).sum::<usize>(),
        }
    }

    /// The largest operand count of any expression in the tree.
    ///
    /// A bare number has no operands and reports zero.
    #[must_use]
    pub fn max_arity(&self) -> usize {
        match self {
            Self::Number { .. } => 0,
            Self::Expression(expr) => {
                expr.operands().map(Self::max_arity).fold(expr.arity(), usize::max)
            },
        }
    }

    /// Collects the statistics of this tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        TreeStats { nodes:     self.node_count(),
                    leaves:    self.leaf_count(),
                    branches:  self.branch_count(),
                    max_arity: self.max_arity(), }
    }
}

impl From<Expression> for Node {
    fn from(expr: Expression) -> Self {
        Self::Expression(expr)
    }
}

impl std::fmt::Display for Node {
    /// Prints the tree back in fully parenthesized prefix form.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number { text } => write!(f, "{text}"),
            Self::Expression(expr) => {
                write!(f, "({}", expr.operator)?;
                for operand in expr.operands() {
                    write!(f, " {operand}")?;
                }
                write!(f, ")")
            },
        }
    }
}

/// Shape statistics of a syntax tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    /// Number leaves plus expressions.
    pub nodes:     usize,
    /// Number leaves.
    pub leaves:    usize,
    /// Expressions.
    pub branches:  usize,
    /// Largest operand count of any expression.
    pub max_arity: usize,
}

impl std::fmt::Display for TreeStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "nodes: {}, leaves: {}, branches: {}, max arity: {}",
               self.nodes, self.leaves, self.branches, self.max_arity)
    }
}
