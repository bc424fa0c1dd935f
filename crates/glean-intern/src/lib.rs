//! Interning repositories with stable references.
//!
//! Unicode analysis (decomposition, case folding, grapheme segmentation) is
//! expensive relative to how often the same identifiers show up, so every
//! analyzed object is built exactly once per process and shared from then on.
//! A [`Repository`] maps an interning key (the object's source text) to a
//! uniquely-owned value and hands out `&'static` references to it.
//!
//! Values are allocated with [`Box::leak`] and never move or drop, which is
//! what makes the `'static` lifetime sound: a reference obtained under the
//! lock stays valid for the rest of the process, even across [`Repository::clear`].

use std::collections::HashMap;

use parking_lot::RwLock;

/// A type that can be built from its source text and stored in a [`Repository`].
pub trait Intern: Sized + Send + Sync + 'static {
    /// Error produced when the source text cannot be analyzed.
    type Error;

    /// Texts longer than this many bytes are replaced with the empty string
    /// before interning, making the empty value the sentinel for "too long".
    const MAX_TEXT_BYTES: Option<usize> = None;

    fn from_text(text: String) -> Result<Self, Self::Error>;
}

/// Thread-safe map from source text to a uniquely-owned `T`.
///
/// Writers (insertions) take the lock exclusively for the duration of a batch;
/// size queries take it shared. Returned references never dangle.
pub struct Repository<T: Intern> {
    elements: RwLock<HashMap<String, &'static T>>,
}

impl<T: Intern> Repository<T> {
    pub fn new() -> Self {
        Self {
            elements: RwLock::new(HashMap::new()),
        }
    }

    /// Intern a batch of texts, building the missing ones, and return the
    /// stored elements in input order.
    ///
    /// The whole batch runs under a single writer lock so a concurrent
    /// [`clear`](Self::clear) cannot interleave with it.
    pub fn get_elements(&self, texts: Vec<String>) -> Result<Vec<&'static T>, T::Error> {
        let mut interned = Vec::with_capacity(texts.len());
        let mut elements = self.elements.write();

        for mut text in texts {
            if let Some(max_bytes) = T::MAX_TEXT_BYTES {
                if text.len() > max_bytes {
                    text.clear();
                }
            }

            let element = match elements.get(text.as_str()) {
                Some(&element) => element,
                None => {
                    let element: &'static T = Box::leak(Box::new(T::from_text(text.clone())?));
                    elements.insert(text, element);
                    element
                }
            };

            interned.push(element);
        }

        Ok(interned)
    }

    /// Intern a single text. See [`get_elements`](Self::get_elements).
    pub fn get_element(&self, text: String) -> Result<&'static T, T::Error> {
        let mut elements = self.get_elements(vec![text])?;
        Ok(elements.remove(0))
    }

    pub fn num_stored_elements(&self) -> usize {
        self.elements.read().len()
    }

    /// Forget every stored element. Only meant to isolate tests and
    /// benchmarks.
    ///
    /// The values themselves are leaked: references returned before the clear
    /// may still be in use and must stay valid.
    pub fn clear(&self) {
        self.elements.write().clear();
    }
}

impl<T: Intern> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    struct Upper(String);

    impl Intern for Upper {
        type Error = std::convert::Infallible;

        fn from_text(text: String) -> Result<Self, Self::Error> {
            Ok(Upper(text.to_uppercase()))
        }
    }

    #[derive(Debug)]
    struct Clamped(String);

    impl Intern for Clamped {
        type Error = std::convert::Infallible;
        const MAX_TEXT_BYTES: Option<usize> = Some(4);

        fn from_text(text: String) -> Result<Self, Self::Error> {
            Ok(Clamped(text))
        }
    }

    #[test]
    fn interning_returns_stable_references() {
        let repo = Repository::<Upper>::new();
        let first = repo.get_elements(vec!["foo".into(), "bar".into()]).unwrap();
        let second = repo.get_elements(vec!["bar".into(), "foo".into()]).unwrap();

        assert!(std::ptr::eq(first[0], second[1]));
        assert!(std::ptr::eq(first[1], second[0]));
        assert_eq!(repo.num_stored_elements(), 2);
    }

    #[test]
    fn duplicates_within_one_batch_are_shared() {
        let repo = Repository::<Upper>::new();
        let elements = repo
            .get_elements(vec!["x".into(), "x".into(), "x".into()])
            .unwrap();

        assert!(std::ptr::eq(elements[0], elements[1]));
        assert!(std::ptr::eq(elements[1], elements[2]));
        assert_eq!(repo.num_stored_elements(), 1);
    }

    #[test]
    fn oversize_texts_collapse_to_the_empty_sentinel() {
        let repo = Repository::<Clamped>::new();
        let elements = repo
            .get_elements(vec!["abcde".into(), "".into(), "abcd".into()])
            .unwrap();

        assert_eq!(elements[0].0, "");
        assert!(std::ptr::eq(elements[0], elements[1]));
        assert_eq!(elements[2].0, "abcd");
        assert_eq!(repo.num_stored_elements(), 2);
    }

    #[test]
    fn clear_resets_the_size_but_old_references_stay_valid() {
        let repo = Repository::<Upper>::new();
        let before = repo.get_element("foo".into()).unwrap();
        repo.clear();
        assert_eq!(repo.num_stored_elements(), 0);
        assert_eq!(before.0, "FOO");

        let after = repo.get_element("foo".into()).unwrap();
        assert!(!std::ptr::eq(before, after));
    }

    #[test]
    fn concurrent_interning_agrees_on_one_element_per_text() {
        let repo = std::sync::Arc::new(Repository::<Upper>::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let repo = std::sync::Arc::clone(&repo);
                std::thread::spawn(move || {
                    let texts = (0..64).map(|i| format!("id{i}")).collect();
                    repo.get_elements(texts).unwrap()
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for result in &results[1..] {
            for (a, b) in results[0].iter().zip(result) {
                assert!(std::ptr::eq(*a, *b));
            }
        }
        assert_eq!(repo.num_stored_elements(), 64);
    }
}
