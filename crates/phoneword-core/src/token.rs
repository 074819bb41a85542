// Translation tokens and immutable token chains
//
// A translation is built root-to-tip during the search. Sibling branches that
// extend the same prefix share the parent node instead of copying it, so the
// chain is a persistent singly-linked list: nodes are never mutated once
// created.

use std::fmt;
use std::sync::Arc;

use crate::encoding::{Digit, digit_for};

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// One element of a translation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A single digit kept literally because no word matched at its position.
    Digit(char),
    /// An original (non-normalized) dictionary word.
    Word(String),
}

impl Token {
    /// Whether this is a [`Token::Digit`].
    pub fn is_digit(&self) -> bool {
        matches!(self, Token::Digit(_))
    }

    /// Digits encoded by this token.
    ///
    /// A word encodes one digit per letter; non-letters are skipped.
    /// Letters outside the encoding table are dropped.
    pub fn encoded_digits(&self) -> String {
        match self {
            Token::Digit(c) => c.to_string(),
            Token::Word(w) => w
                .chars()
                .filter(|c| c.is_alphabetic())
                .filter_map(digit_for)
                .map(Digit::as_char)
                .collect(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Digit(c) => write!(f, "{c}"),
            Token::Word(w) => f.write_str(w),
        }
    }
}

// ---------------------------------------------------------------------------
// TokenChain
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct Node {
    token: Token,
    parent: Option<TokenChain>,
    len: usize,
}

// Unlink parents one at a time so dropping a long chain does not recurse
// once per node.
impl Drop for Node {
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(chain) = parent {
            match Arc::try_unwrap(chain.node) {
                Ok(mut node) => parent = node.parent.take(),
                Err(_) => break,
            }
        }
    }
}

/// An immutable chain of tokens, identified by its tip.
///
/// Cloning a chain is cheap (reference count bump). Two chains compare equal
/// when they hold the same token sequence.
#[derive(Debug, Clone)]
pub struct TokenChain {
    node: Arc<Node>,
}

impl TokenChain {
    /// Create a root chain holding a single token.
    pub fn root(token: Token) -> Self {
        Self::push(None, token)
    }

    /// Extend `parent` (or start a new chain when `None`) with `token`.
    ///
    /// The parent is shared, not copied.
    pub fn push(parent: Option<&TokenChain>, token: Token) -> Self {
        let len = parent.map_or(0, TokenChain::len) + 1;
        Self {
            node: Arc::new(Node {
                token,
                parent: parent.cloned(),
                len,
            }),
        }
    }

    /// The last token of the chain.
    pub fn last(&self) -> &Token {
        &self.node.token
    }

    /// The chain without its last token, or `None` for a root.
    pub fn parent(&self) -> Option<&TokenChain> {
        self.node.parent.as_ref()
    }

    /// Whether this chain has no parent.
    pub fn is_root(&self) -> bool {
        self.node.parent.is_none()
    }

    /// Number of tokens in the chain.
    pub fn len(&self) -> usize {
        self.node.len
    }

    /// Always `false`: a chain holds at least one token.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `self` and `other` are the same node (not just equal tokens).
    pub fn ptr_eq(&self, other: &TokenChain) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }

    /// Tokens from tip to root.
    pub fn iter_rev(&self) -> ChainIter<'_> {
        ChainIter { next: Some(self) }
    }

    /// Tokens from root to tip.
    pub fn tokens(&self) -> Vec<&Token> {
        let mut tokens: Vec<&Token> = self.iter_rev().collect();
        tokens.reverse();
        tokens
    }

    /// Render the chain: token texts root-first, separated by single spaces.
    pub fn render(&self) -> String {
        self.tokens()
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Whether any two consecutive tokens are both digits.
    pub fn has_adjacent_digits(&self) -> bool {
        let tokens = self.tokens();
        tokens.windows(2).any(|w| w[0].is_digit() && w[1].is_digit())
    }

    /// Digits encoded by the whole chain, root-first.
    pub fn encoded_digits(&self) -> String {
        self.tokens().iter().map(|t| t.encoded_digits()).collect()
    }
}

impl PartialEq for TokenChain {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter_rev().eq(other.iter_rev())
    }
}

impl Eq for TokenChain {}

impl fmt::Display for TokenChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Iterator over a chain's tokens, tip first.
pub struct ChainIter<'a> {
    next: Option<&'a TokenChain>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a Token;

    fn next(&mut self) -> Option<Self::Item> {
        let chain = self.next?;
        self.next = chain.parent();
        Some(chain.last())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(w: &str) -> Token {
        Token::Word(w.to_string())
    }

    #[test]
    fn root_chain() {
        let c = TokenChain::root(word("Tor"));
        assert!(c.is_root());
        assert_eq!(c.len(), 1);
        assert_eq!(c.render(), "Tor");
    }

    #[test]
    fn push_renders_root_first() {
        let a = TokenChain::root(word("so"));
        let b = TokenChain::push(Some(&a), Token::Digit('1'));
        let c = TokenChain::push(Some(&b), word("Tor"));
        assert_eq!(c.render(), "so 1 Tor");
        assert_eq!(c.len(), 3);
        assert_eq!(c.last(), &word("Tor"));
        assert!(c.parent().unwrap().last().is_digit());
    }

    #[test]
    fn siblings_share_parent() {
        let root = TokenChain::root(word("mir"));
        let left = TokenChain::push(Some(&root), word("Tor"));
        let right = TokenChain::push(Some(&root), Token::Digit('4'));
        assert!(left.parent().unwrap().ptr_eq(&root));
        assert!(right.parent().unwrap().ptr_eq(&root));
        // The parent is untouched by either extension.
        assert_eq!(root.render(), "mir");
    }

    #[test]
    fn structural_equality() {
        let a = TokenChain::push(Some(&TokenChain::root(word("Mix"))), word("Tor"));
        let b = TokenChain::push(Some(&TokenChain::root(word("Mix"))), word("Tor"));
        let c = TokenChain::push(Some(&TokenChain::root(word("mir"))), word("Tor"));
        assert_eq!(a, b);
        assert!(!a.ptr_eq(&b));
        assert_ne!(a, c);
    }

    #[test]
    fn adjacent_digit_detection() {
        let a = TokenChain::root(Token::Digit('0'));
        let b = TokenChain::push(Some(&a), word("Tor"));
        let c = TokenChain::push(Some(&b), Token::Digit('4'));
        assert!(!c.has_adjacent_digits());
        let d = TokenChain::push(Some(&c), Token::Digit('5'));
        assert!(d.has_adjacent_digits());
    }

    #[test]
    fn encoded_digits_round_trip() {
        let a = TokenChain::root(word("je"));
        let b = TokenChain::push(Some(&a), word("Bo\""));
        let c = TokenChain::push(Some(&b), word("da"));
        assert_eq!(c.encoded_digits(), "107835");
        let d = TokenChain::push(Some(&TokenChain::root(Token::Digit('0'))), word("Tor"));
        assert_eq!(d.encoded_digits(), "0482");
    }

    #[test]
    fn token_display() {
        assert_eq!(Token::Digit('7').to_string(), "7");
        assert_eq!(word("o\"d").to_string(), "o\"d");
    }

    #[test]
    fn dropping_a_long_chain() {
        let mut chain = TokenChain::root(word("e"));
        for _ in 0..200_000 {
            chain = TokenChain::push(Some(&chain), word("e"));
        }
        assert_eq!(chain.len(), 200_001);
        drop(chain);
    }

    #[test]
    fn dropping_a_branch_keeps_shared_prefix() {
        let mut prefix = TokenChain::root(word("so"));
        for _ in 0..1000 {
            prefix = TokenChain::push(Some(&prefix), Token::Digit('1'));
        }
        let branch = TokenChain::push(Some(&prefix), word("Tor"));
        drop(branch);
        assert_eq!(prefix.len(), 1001);
        assert_eq!(prefix.tokens()[0], &word("so"));
        assert_eq!(prefix.last(), &Token::Digit('1'));
    }

    #[test]
    fn chain_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TokenChain>();
    }
}
