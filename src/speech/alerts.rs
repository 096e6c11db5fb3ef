/// Describe active alerts as a spoken clause.
///
/// Returns an empty string when there are no alerts, otherwise a sentence such
/// as `"The area is under 3 alerts: A, B and C. "`. Titles are spoken in the
/// order given, duplicates included.
#[must_use]
pub fn alert_phrase<S: AsRef<str>>(titles: &[S]) -> String {
    let count = titles.len();
    if count == 0 {
        return String::new();
    }

    let plural = if count > 1 { "s" } else { "" };
    let mut phrase = format!("The area is under {count} alert{plural}: ");

    match titles {
        [only] => phrase.push_str(only.as_ref()),
        [leading @ .., second_last, last] => {
            for title in leading {
                phrase.push_str(title.as_ref());
                phrase.push_str(", ");
            }
            phrase.push_str(second_last.as_ref());
            phrase.push_str(" and ");
            phrase.push_str(last.as_ref());
        }
        [] => {}
    }

    phrase.push_str(". ");
    phrase
}
