//! whitespace separated formatting for shapes and inline payloads

/// A value that can be written as a single locale-independent token in an
/// XDMF attribute or text payload
pub trait AsciiToken {
    fn push_token(&self, out: &mut String);
}

macro_rules! integer_token {
    ($($int:ty),*) => {
        $(
            impl AsciiToken for $int {
                fn push_token(&self, out: &mut String) {
                    out.push_str(&self.to_string());
                }
            }
        )*
    };
}

integer_token!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl AsciiToken for f32 {
    fn push_token(&self, out: &mut String) {
        let mut buffer = ryu::Buffer::new();
        out.push_str(buffer.format(*self));
    }
}

impl AsciiToken for f64 {
    fn push_token(&self, out: &mut String) {
        let mut buffer = ryu::Buffer::new();
        out.push_str(buffer.format(*self));
    }
}

impl<T: AsciiToken> AsciiToken for &T {
    fn push_token(&self, out: &mut String) {
        (*self).push_token(out)
    }
}

/// Join the values with a single space, in the order they are yielded.
///
/// Used both for `Dimensions` attributes (shapes) and for the flattened
/// contents of inline data items. An empty sequence formats to `""`.
///
/// ```
/// assert_eq!(xdmf::format_sequence(&[12usize, 3]), "12 3");
/// assert_eq!(xdmf::format_sequence(&[0.5f64, 2.0]), "0.5 2.0");
/// ```
pub fn format_sequence<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: AsciiToken,
{
    let mut out = String::new();

    for (idx, value) in values.into_iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        value.push_token(&mut out);
    }

    out
}
