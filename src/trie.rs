//! 26-ary prefix tree over the lowercase Latin alphabet.
//!
//! The root is a sentinel holding no letter. Every other node holds the letter on the
//! edge leading into it and a flag telling whether the path from the root spells a
//! complete dictionary word. Children are owned directly by their parent, indexed by
//! letter rank, so there are no shared or back references.
//!
//! ```
//! use anagrammer::trie::Trie;
//!
//! let trie = Trie::from_words(["bake", "baker", "cake"]).unwrap();
//! assert!(trie.contains_exact("baker"));
//! assert!(!trie.contains_exact("bak"));
//! assert_eq!(trie.words(), vec!["bake", "baker", "cake"]);
//! ```

use crate::errors::ParseError;
use crate::letters::{letter_rank, ALPHABET_SIZE};

/// One letter position in the trie.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// `None` only for the root
    letter: Option<char>,
    is_word_end: bool,
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
}

impl TrieNode {
    fn with_letter(letter: char) -> Self {
        TrieNode { letter: Some(letter), ..TrieNode::default() }
    }

    /// The letter this node represents (`None` for the root sentinel).
    #[must_use]
    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    /// Whether the path from the root to this node spells a dictionary word.
    #[must_use]
    pub fn is_word_end(&self) -> bool {
        self.is_word_end
    }

    /// Child reached by `letter`, if any. Anything outside a-z has no child.
    #[must_use]
    pub fn child(&self, letter: char) -> Option<&TrieNode> {
        let rank = letter_rank(letter).ok()?;
        self.children[rank].as_deref()
    }

    /// Existing children as `(letter, node)` pairs, in rank (alphabetical) order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> + '_ {
        self.children
            .iter()
            .flatten()
            .filter_map(|node| node.letter().map(|letter| (letter, &**node)))
    }
}

/// The dictionary's prefix tree. Built once, then only read.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    word_count: usize,
    node_count: usize,
}

impl Trie {
    /// An empty trie holding only the root sentinel.
    #[must_use]
    pub fn new() -> Self {
        Trie::default()
    }

    /// Build a trie from already-normalized words.
    ///
    /// # Errors
    ///
    /// Fails on the first word [`Trie::insert`] rejects.
    pub fn from_words<I, S>(words: I) -> Result<Self, Box<ParseError>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word.as_ref())?;
        }
        Ok(trie)
    }

    /// Add a lowercase a-z word. Inserting a word that is already present is a no-op.
    ///
    /// The whole word is validated before any node is created, so a rejected word
    /// leaves the trie exactly as it was.
    ///
    /// # Errors
    ///
    /// - `ParseError::EmptyInput` for the empty string
    /// - `ParseError::InvalidLowercaseChar` if any char is outside a-z; callers are
    ///   expected to run words through [`crate::letters::normalize`] first
    pub fn insert(&mut self, word: &str) -> Result<(), Box<ParseError>> {
        if word.is_empty() {
            return Err(Box::new(ParseError::EmptyInput));
        }
        let ranks = word.chars().map(letter_rank).collect::<Result<Vec<_>, _>>()?;

        let mut node = &mut self.root;
        let mut new_nodes = 0;
        for (rank, letter) in ranks.into_iter().zip(word.chars()) {
            node = node.children[rank].get_or_insert_with(|| {
                new_nodes += 1;
                Box::new(TrieNode::with_letter(letter))
            }).as_mut();
        }
        self.node_count += new_nodes;

        if !node.is_word_end {
            node.is_word_end = true;
            self.word_count += 1;
        }
        Ok(())
    }

    /// Whether `word` was inserted (a path spelling it ends on a word-end node).
    #[must_use]
    pub fn contains_exact(&self, word: &str) -> bool {
        word.chars()
            .try_fold(&self.root, |node, c| node.child(c))
            .is_some_and(TrieNode::is_word_end)
    }

    /// The root sentinel, the starting point of every traversal.
    #[must_use]
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct words stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.word_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of nodes, excluding the root.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Every stored word in alphabetical order.
    #[must_use]
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.word_count);
        let mut prefix = String::new();
        Self::collect_words(&self.root, &mut prefix, &mut words);
        words
    }

    fn collect_words(node: &TrieNode, prefix: &mut String, words: &mut Vec<String>) {
        if node.is_word_end {
            words.push(prefix.clone());
        }
        for (letter, child) in node.children() {
            prefix.push(letter);
            Self::collect_words(child, prefix, words);
            prefix.pop();
        }
    }
}
