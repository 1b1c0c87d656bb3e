use glam::Vec3;

use crate::error::MeshError;
use crate::types::SphereMesh;

/// Floats per triangle record after the leading tag.
const FLOATS_PER_TRIANGLE: usize = 9;

/// Parse the whitespace-delimited sphere format.
///
/// The first token is the triangle count `N`. Each of the `N` records that
/// follow is a tag (usually the vertex count, 3) and nine floats: three
/// vertices of `x y z`. Line breaks carry no meaning.
pub fn parse_str(input: &str) -> Result<SphereMesh, MeshError> {
    let mut tokens = Tokens::new(input);

    let declared = match tokens.next() {
        Some((line, token)) => parse_count(line, token)?,
        None => return Err(MeshError::Validation("mesh file is empty".to_string())),
    };
    if declared == 0 {
        return Err(MeshError::Validation("mesh has no triangles".to_string()));
    }

    // The header is untrusted; let the vector grow past this.
    let mut positions = Vec::with_capacity(declared.min(1 << 16) * 3);
    for complete in 0..declared {
        let (line, tag) = tokens
            .next()
            .ok_or(MeshError::Truncated { declared, complete })?;
        parse_float(line, tag)?;

        let mut coords = [0.0f32; FLOATS_PER_TRIANGLE];
        for slot in coords.iter_mut() {
            let (line, token) = tokens
                .next()
                .ok_or(MeshError::Truncated { declared, complete })?;
            *slot = parse_float(line, token)?;
        }
        for v in coords.chunks_exact(3) {
            positions.push(Vec3::new(v[0], v[1], v[2]));
        }
    }

    let trailing = tokens.count();
    if trailing > 0 {
        log::warn!("ignoring {} tokens after the last triangle", trailing);
    }

    SphereMesh::from_positions(positions)
}

/// Triangle count: a non-negative whole number. Integral floats such as
/// `128.0` are accepted.
fn parse_count(line: usize, token: &str) -> Result<usize, MeshError> {
    let err = || MeshError::Parse {
        line,
        expected: "a non-negative triangle count",
        token: token.to_string(),
    };
    if let Ok(n) = token.parse::<usize>() {
        return Ok(n);
    }
    let value: f64 = token.parse().map_err(|_| err())?;
    if value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
        return Err(err());
    }
    Ok(value as usize)
}

fn parse_float(line: usize, token: &str) -> Result<f32, MeshError> {
    token.parse::<f32>().map_err(|_| MeshError::Parse {
        line,
        expected: "a number",
        token: token.to_string(),
    })
}

/// Whitespace tokens tagged with their 1-based line number.
struct Tokens<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    current: Option<(usize, std::str::SplitWhitespace<'a>)>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().enumerate(),
            current: None,
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((line, words)) = self.current.as_mut() {
                if let Some(word) = words.next() {
                    return Some((*line, word));
                }
            }
            let (index, text) = self.lines.next()?;
            self.current = Some((index + 1, text.split_whitespace()));
        }
    }
}
