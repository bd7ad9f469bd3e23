//! Reading vectors from text.

use std::{
    any,
    error::Error,
    io::{self, BufRead},
    str::FromStr,
};

use crate::ReadError;

use super::Vector;

impl<T, const N: usize> Vector<T, N> {
    /// Reads `N` whitespace-separated elements from `reader`, assigning them in order.
    ///
    /// Leading whitespace is skipped, and input is only consumed up to the end of the last
    /// element, so multiple vectors (or other values) can be read from the same reader in
    /// sequence. The [alternate `Display` form][std::fmt::Display] (`{:#}`) writes exactly the
    /// format this method reads.
    ///
    /// # Errors
    ///
    /// Fails if the reader errors, if it runs out of input, or if a token fails to parse as `T`.
    ///
    /// Elements are assigned as soon as they are parsed. If an error occurs, the elements before
    /// the failing one have already been overwritten, while the remaining ones keep their previous
    /// values. Use [`str::parse`] if that is undesirable.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmath::*;
    /// let mut input = "1.5 -2\n 3 4".as_bytes();
    /// let mut a = Vec2f::ZERO;
    /// let mut b = Vec2f::ZERO;
    /// a.read_from(&mut input)?;
    /// b.read_from(&mut input)?;
    /// assert_eq!(a, vec2(1.5, -2.0));
    /// assert_eq!(b, vec2(3.0, 4.0));
    /// # Ok::<_, ReadError>(())
    /// ```
    pub fn read_from<R>(&mut self, reader: &mut R) -> Result<(), ReadError>
    where
        R: BufRead + ?Sized,
        T: FromStr,
        T::Err: Error + Send + Sync + 'static,
    {
        let result = self.read_elements(reader);
        if let Err(e) = &result {
            log::debug!("failed to read vec<{}, {}>: {}", N, any::type_name::<T>(), e);
        }
        result
    }

    fn read_elements<R>(&mut self, reader: &mut R) -> Result<(), ReadError>
    where
        R: BufRead + ?Sized,
        T: FromStr,
        T::Err: Error + Send + Sync + 'static,
    {
        for index in 0..N {
            let bytes =
                next_token(reader)?.ok_or(ReadError::UnexpectedEof { index, expected: N })?;
            let token = String::from_utf8(bytes).map_err(|e| ReadError::InvalidComponent {
                index,
                token: String::from_utf8_lossy(e.as_bytes()).into_owned(),
                source: Box::new(e),
            })?;
            self.0[index] = parse_component(index, &token)?;
            log::trace!(
                "read component {} of vec<{}, {}>: {}",
                index,
                N,
                any::type_name::<T>(),
                token
            );
        }
        Ok(())
    }
}

/// Parses a vector from either its [`Display`][std::fmt::Display] form (`vec<2, f32>( 1 2 )`),
/// or from just the whitespace-separated elements (`1 2`).
///
/// The type tag before the opening parenthesis is not validated.
///
/// # Examples
///
/// ```
/// # use vecmath::*;
/// let v: Vec3<i32> = "vec<3, i32>( 1 -2 3 )".parse()?;
/// assert_eq!(v, vec3(1, -2, 3));
///
/// let v: Vec2f = " 0.5   7 ".parse()?;
/// assert_eq!(v, vec2(0.5, 7.0));
///
/// assert!("1 2 3".parse::<Vec2f>().is_err());
/// # Ok::<_, ReadError>(())
/// ```
impl<T, const N: usize> FromStr for Vector<T, N>
where
    T: FromStr + Default,
    T::Err: Error + Send + Sync + 'static,
{
    type Err = ReadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let elems = match s.find('(') {
            Some(open) => {
                let close = s
                    .rfind(')')
                    .filter(|&close| close > open)
                    .ok_or(ReadError::MalformedTag)?;
                if let Some(token) = s[close + 1..].split_whitespace().next() {
                    return Err(ReadError::TrailingInput {
                        token: token.to_string(),
                    });
                }
                &s[open + 1..close]
            }
            None => s,
        };
        if elems.contains(|c: char| c == '(' || c == ')') {
            return Err(ReadError::MalformedTag);
        }

        let mut tokens = elems.split_whitespace();
        let mut vector = Self::default();
        for index in 0..N {
            let token = tokens
                .next()
                .ok_or(ReadError::UnexpectedEof { index, expected: N })?;
            vector[index] = parse_component(index, token)?;
        }
        match tokens.next() {
            Some(token) => Err(ReadError::TrailingInput {
                token: token.to_string(),
            }),
            None => Ok(vector),
        }
    }
}

fn parse_component<T>(index: usize, token: &str) -> Result<T, ReadError>
where
    T: FromStr,
    T::Err: Error + Send + Sync + 'static,
{
    token.parse().map_err(|e| ReadError::InvalidComponent {
        index,
        token: token.to_string(),
        source: Box::new(e),
    })
}

/// Reads the next whitespace-delimited token from `reader`.
///
/// The whitespace byte ending the token is left in the reader. Returns `None` at end of input.
fn next_token<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Option<Vec<u8>>> {
    let mut token = Vec::new();
    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }

        let mut used = 0;
        let mut done = false;
        for &byte in buf {
            if byte.is_ascii_whitespace() {
                if !token.is_empty() {
                    done = true;
                    break;
                }
            } else {
                token.push(byte);
            }
            used += 1;
        }
        reader.consume(used);
        if done {
            break;
        }
    }

    Ok(if token.is_empty() { None } else { Some(token) })
}

#[cfg(test)]
mod tests {
    use std::io::{BufReader, Read};

    use approx::assert_relative_eq;

    use crate::{vec2, vec3, ReadError, Vec2f, Vec3f, Vec3i, Vector};

    #[test]
    fn read_sequence() {
        let mut input = "1 2 3\n\t4   5 6 rest".as_bytes();
        let mut a = Vec3i::ZERO;
        let mut b = Vec3i::ZERO;
        a.read_from(&mut input).unwrap();
        b.read_from(&mut input).unwrap();
        assert_eq!(a, vec3(1, 2, 3));
        assert_eq!(b, vec3(4, 5, 6));

        let mut rest = String::new();
        input.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, " rest");
    }

    #[test]
    fn read_across_buffer_boundaries() {
        // A 1-byte buffer forces every token to be assembled from several `fill_buf` calls.
        let mut reader = BufReader::with_capacity(1, "  -12.25   1e3 ".as_bytes());
        let mut v = Vec2f::ZERO;
        v.read_from(&mut reader).unwrap();
        assert_eq!(v, vec2(-12.25, 1000.0));
    }

    #[test]
    fn read_eof_keeps_earlier_components() {
        let mut v = vec3(7, 8, 9);
        let err = v.read_from(&mut "1 2".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ReadError::UnexpectedEof {
                index: 2,
                expected: 3
            }
        ));
        assert_eq!(v, vec3(1, 2, 9));
    }

    #[test]
    fn read_invalid_keeps_earlier_components() {
        let mut v = vec3(7, 8, 9);
        let err = v.read_from(&mut "10 x 30".as_bytes()).unwrap_err();
        match &err {
            ReadError::InvalidComponent { index, token, .. } => {
                assert_eq!(*index, 1);
                assert_eq!(token, "x");
            }
            _ => panic!("unexpected error {err:?}"),
        }
        assert_eq!(v, vec3(10, 8, 9));
        assert!(err.to_string().contains("`x`"));
    }

    #[test]
    fn read_empty() {
        let mut v = Vec2f::splat(1.0);
        assert!(matches!(
            v.read_from(&mut "  \n ".as_bytes()),
            Err(ReadError::UnexpectedEof { index: 0, .. })
        ));
        assert_eq!(v, Vec2f::splat(1.0));
    }

    #[test]
    fn read_invalid_utf8() {
        let mut v = Vec2f::ZERO;
        let err = v.read_from(&mut &b"1 \xff"[..]).unwrap_err();
        assert!(matches!(err, ReadError::InvalidComponent { index: 1, .. }));
        assert_eq!(v, vec2(1.0, 0.0));
    }

    #[test]
    fn read_io_error() {
        struct Failing;

        impl Read for Failing {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "disconnected"))
            }
        }

        let mut v = Vec2f::ZERO;
        let err = v.read_from(&mut BufReader::new(Failing)).unwrap_err();
        assert!(matches!(err, ReadError::Io(_)));
    }

    #[test]
    fn parse() {
        assert_eq!("1 2 3".parse::<Vec3i>().unwrap(), vec3(1, 2, 3));
        assert_eq!(
            "vec<3, i32>( 1 2 3 )".parse::<Vec3i>().unwrap(),
            vec3(1, 2, 3)
        );
        assert_eq!("(4 5 6)".parse::<Vec3i>().unwrap(), vec3(4, 5, 6));

        assert!(matches!(
            "1 2".parse::<Vec3i>(),
            Err(ReadError::UnexpectedEof { index: 2, .. })
        ));
        assert!(matches!(
            "1 2 3 4".parse::<Vec3i>(),
            Err(ReadError::TrailingInput { token }) if token == "4"
        ));
        assert!(matches!(
            "vec<3, i32>( 1 2 3".parse::<Vec3i>(),
            Err(ReadError::MalformedTag)
        ));
        assert!(matches!(
            "1 2 3)".parse::<Vec3i>(),
            Err(ReadError::MalformedTag)
        ));
        assert!(matches!(
            "vec<3, i32>( 1 2 3 ) x".parse::<Vec3i>(),
            Err(ReadError::TrailingInput { token }) if token == "x"
        ));
        assert!(matches!(
            ") 1 2 3 (".parse::<Vec3i>(),
            Err(ReadError::MalformedTag)
        ));
        assert_eq!("( 1 2 3 )  \n".parse::<Vec3i>().unwrap(), vec3(1, 2, 3));
        assert!(matches!(
            "1 2.5 3".parse::<Vec3i>(),
            Err(ReadError::InvalidComponent { index: 1, .. })
        ));
    }

    #[test]
    fn display_roundtrip() {
        let v = vec3(0.1f32, -1e-7, 12345.678);
        let parsed: Vec3f = v.to_string().parse().unwrap();
        assert_eq!(parsed, v);

        let mut read = Vec3f::ZERO;
        read.read_from(&mut format!("{v:#}").as_bytes()).unwrap();
        assert_eq!(read, v);

        let w = Vector::new([1.0f64 / 3.0, 2.0, -0.0, 1e300]);
        let parsed: Vector<f64, 4> = w.to_string().parse().unwrap();
        assert_relative_eq!(parsed, w);
    }
}
