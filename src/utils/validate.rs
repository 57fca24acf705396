/// Free-text rule shared by every write path: present and at least three
/// characters once surrounding whitespace is stripped.
pub fn valid_text(value: &str) -> bool {
    value.trim().chars().count() >= 3
}
