// Lazy, infinite streams.
//
// A `Stream` is a description: a seed plus a step function. Nothing past the
// head is computed until the stream is iterated, and `drop` hands back a new
// stream while leaving the original untouched.

use crate::config::StreamConfig;
use crate::error::Result;
use crate::lesson::Transcript;
use itertools::Itertools;
use std::fmt;
use std::iter;

#[derive(Clone)]
pub struct Stream<T, F> {
    head: T,
    step: F,
}

impl<T, F> Stream<T, F>
where
    T: Clone,
    F: Fn(&T) -> T + Clone,
{
    pub fn iterate(seed: T, step: F) -> Self {
        Stream { head: seed, step }
    }

    pub fn head(&self) -> &T {
        &self.head
    }

    pub fn drop(&self, n: usize) -> Self {
        let head = (0..n).fold(self.head.clone(), |current, _| (self.step)(&current));
        Stream {
            head,
            step: self.step.clone(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        iter::successors(Some(self.head.clone()), move |current| {
            Some((self.step)(current))
        })
    }

    /// Consumes the stream, yielding the same values as `iter`.
    pub fn into_values(self) -> impl Iterator<Item = T> {
        let Stream { head, step } = self;
        iter::successors(Some(head), move |current| Some(step(current)))
    }
}

impl<T: fmt::Display, F> fmt::Display for Stream<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stream({}, ?)", self.head)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Stream<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream").field("head", &self.head).finish_non_exhaustive()
    }
}

fn successor(i: &u64) -> u64 {
    i + 1
}

/// 0, 1, 2, ...
pub fn naturals() -> Stream<u64, fn(&u64) -> u64> {
    Stream::iterate(0, successor as fn(&u64) -> u64)
}

/// Square roots of the even naturals, taken while they stay below `bound`.
/// Nothing is computed until the iterator is pulled.
pub fn even_square_roots(bound: f64) -> impl Iterator<Item = f64> {
    naturals()
        .into_values()
        .filter(|i| i % 2 == 0)
        .map(|i| (i as f64).sqrt())
        .take_while(move |root| *root < bound)
}

pub fn lesson(config: &StreamConfig, out: &Transcript) -> Result<()> {
    let s = naturals();
    let dropped = s.drop(5);
    out.say(s.to_string());
    out.say(dropped.to_string());

    // only the preview is kept; the rest is counted as it streams past
    let mut roots = even_square_roots(config.bound);
    let preview: Vec<f64> = roots.by_ref().take(config.preview).collect();
    for root in &preview {
        out.say(root.to_string());
    }
    let (rest, last) = roots.fold((0usize, None), |(count, _), root| (count + 1, Some(root)));
    if let Some(last) = last {
        out.say(format!("... {rest} more, last {last}"));
    }
    out.say(format!(
        "{} even square roots below {}",
        preview.len() + rest,
        config.bound
    ));
    out.say(format!(
        "first five of {}: {}",
        dropped,
        dropped.iter().take(5).join(", ")
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_shows_only_head() {
        assert_eq!(naturals().to_string(), "Stream(0, ?)");
        assert_eq!(naturals().drop(5).to_string(), "Stream(5, ?)");
    }

    #[test]
    fn test_drop_leaves_original() {
        let s = naturals();
        let dropped = s.drop(5);
        assert_eq!(*s.head(), 0);
        assert_eq!(*dropped.head(), 5);
        assert_eq!(dropped.iter().take(3).collect::<Vec<_>>(), vec![5, 6, 7]);
        assert_eq!(s.iter().take(3).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_custom_step() {
        let powers = Stream::iterate(1u32, |x| x * 2);
        assert_eq!(powers.iter().take(5).collect::<Vec<_>>(), vec![1, 2, 4, 8, 16]);
    }

    #[test]
    fn test_even_square_roots_count() {
        let roots: Vec<f64> = even_square_roots(100.0).collect();
        assert_eq!(roots.len(), 5000);
        assert_eq!(roots[0], 0.0);
        assert_eq!(roots[2], 2.0);
        assert!(roots.iter().all(|root| *root < 100.0));
    }

    #[test]
    fn test_even_square_roots_small_bound() {
        // sqrt(0), sqrt(2), sqrt(4) = 2 stops
        assert_eq!(even_square_roots(2.0).count(), 2);
    }

    #[test]
    fn test_even_square_roots_is_lazy() {
        // a bound this large would never finish if the roots were collected
        let first: Vec<f64> = even_square_roots(1e12).take(3).collect();
        assert_eq!(first, vec![0.0, 2f64.sqrt(), 2.0]);
    }

    #[test]
    fn test_into_values_matches_iter() {
        let s = naturals().drop(3);
        let borrowed: Vec<u64> = s.iter().take(4).collect();
        assert_eq!(s.into_values().take(4).collect::<Vec<_>>(), borrowed);
    }

    #[test]
    fn test_lesson_preview() {
        let config = StreamConfig {
            bound: 100.0,
            preview: 3,
        };
        let out = Transcript::new();
        lesson(&config, &out).unwrap();
        let lines = out.lines();
        assert_eq!(lines[0], "Stream(0, ?)");
        assert_eq!(lines[1], "Stream(5, ?)");
        assert_eq!(lines[2], "0");
        assert!(lines.contains(&"5000 even square roots below 100".to_string()));
        assert!(lines.contains(&"first five of Stream(5, ?): 5, 6, 7, 8, 9".to_string()));
        assert!(lines[5].starts_with("... 4997 more, last 99.98"));
    }

    #[test]
    fn test_lesson_preview_larger_than_stream() {
        let config = StreamConfig {
            bound: 2.0,
            preview: 10,
        };
        let out = Transcript::new();
        lesson(&config, &out).unwrap();
        assert!(out.lines().iter().all(|line| !line.starts_with("...")));
        assert_eq!(out.count("2 even square roots below 2"), 1);
    }
}
