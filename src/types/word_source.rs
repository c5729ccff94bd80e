/// A weighted pool of candidate words.
///
/// `ratio` is relative: the mixer renormalizes it against the sum of all
/// ratios it is given.
#[derive(Debug, Clone, PartialEq)]
pub struct WordSource {
    pub words: Vec<String>,
    pub ratio: f64,
}

impl WordSource {
    pub fn new<I, S>(words: I, ratio: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            ratio,
        }
    }
}
