//! Line tokenizer shared by the `.obj` and `.mtl` parsers.
//!
//! Every meaningful line becomes a [`Line`]: its keyword plus the remaining,
//! whitespace-collapsed tokens. The keyword is then turned into a typed
//! directive ([`ObjDirective`] or [`MtlDirective`]) so the parsers never compare
//! strings themselves.

use crystal::prelude::*;
use log::{debug, warn};

use super::obj::ObjFaceIndex;
use crate::error::ParseError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Line<'a> {
    /// 1-based line number in the source text.
    pub(crate) number: usize,
    pub(crate) keyword: &'a str,
    pub(crate) args: Vec<&'a str>,
}

impl Line<'_> {
    /// Everything after the keyword, with repeated spaces collapsed.
    pub(crate) fn remainder(&self) -> String {
        self.args.join(" ")
    }

    fn malformed_number(&self, token: &str) -> ParseError {
        ParseError::MalformedNumber {
            line: self.number,
            token: token.into(),
        }
    }

    fn float(&self, token: &str) -> Result<f32, ParseError> {
        token.parse().map_err(|_| self.malformed_number(token))
    }

    fn index(&self, token: &str) -> Result<usize, ParseError> {
        token.parse().map_err(|_| self.malformed_number(token))
    }

    fn expect_args(&self, expected: usize) -> Result<(), ParseError> {
        if self.args.len() < expected {
            return Err(ParseError::MissingArguments {
                line: self.number,
                directive: self.keyword.into(),
                expected,
                found: self.args.len(),
            });
        }
        Ok(())
    }

    // accepts 2 or 3 numbers (2d points get z = 0), ignores anything past the third
    fn vector(&self) -> Result<Vec3<f32>, ParseError> {
        let numbers = self
            .args
            .iter()
            .take(3)
            .map(|token| self.float(token))
            .collect::<Result<Vec<f32>, _>>()?;

        Ok(match numbers[..] {
            [x, y, z] => Vec3::new(x, y, z),
            [x, y] => Vec3::new(x, y, 0.0),
            _ => {
                warn!(
                    "Line {}: `{}` with a single value, using zero vector",
                    self.number, self.keyword
                );
                Vec3::zero()
            }
        })
    }

    fn rgb(&self) -> Result<[f32; 3], ParseError> {
        self.expect_args(3)?;
        Ok([
            self.float(self.args[0])?,
            self.float(self.args[1])?,
            self.float(self.args[2])?,
        ])
    }

    fn scalar(&self) -> Result<f32, ParseError> {
        self.expect_args(1)?;
        self.float(self.args[0])
    }

    // parses a single face vertex `p`, `p/t`, `p//n` or `p/t/n`
    fn face_index(&self, token: &str) -> Result<ObjFaceIndex, ParseError> {
        let mut triplet = token.split('/');

        let vert = triplet.next().unwrap_or_default();
        if vert.is_empty() {
            return Err(ParseError::MalformedFaceVertex {
                line: self.number,
                token: token.into(),
            });
        }

        let optional = |value: Option<&str>| match value {
            Some(value) if !value.is_empty() => self.index(value).map(Some),
            _ => Ok(None),
        };

        Ok(ObjFaceIndex {
            vert_i: self.index(vert)?,
            uv_i: optional(triplet.next())?,
            normal_i: optional(triplet.next())?,
        })
    }
}

/// Splits text into lines and tokens, dropping blank lines, comments and lines without arguments.
pub(crate) fn lines(text: &str) -> impl Iterator<Item = Line<'_>> {
    text.split('\n').enumerate().filter_map(|(idx, raw)| {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }

        let mut tokens = trimmed.split_whitespace();
        let keyword = tokens.next()?;
        let args: Vec<&str> = tokens.collect();
        if args.is_empty() {
            debug!("Line {}: `{}` without arguments. Ignoring.", idx + 1, keyword);
            return None;
        }

        Some(Line {
            number: idx + 1,
            keyword,
            args,
        })
    })
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ObjDirective {
    MaterialLibrary(String),
    Position(Vec3<f32>),
    Normal(Vec3<f32>),
    TexCoord(Vec2<f32>),
    /// `g` and `o` both open (or reselect) a part.
    Part(String),
    UseMaterial(String),
    Face(Vec<ObjFaceIndex>),
}

impl ObjDirective {
    /// Returns `None` for directives the importer does not handle.
    pub(crate) fn lex(line: &Line<'_>) -> Result<Option<Self>, ParseError> {
        let directive = match line.keyword {
            "mtllib" => ObjDirective::MaterialLibrary(line.remainder()),
            "v" => ObjDirective::Position(line.vector()?),
            "vn" => ObjDirective::Normal(line.vector()?),
            "vt" => {
                let uv = line.vector()?;
                ObjDirective::TexCoord(Vec2::new(uv.x, uv.y))
            }
            "g" | "o" => ObjDirective::Part(line.remainder()),
            "usemtl" => ObjDirective::UseMaterial(line.remainder()),
            "f" => ObjDirective::Face(
                line.args
                    .iter()
                    .map(|token| line.face_index(token))
                    .collect::<Result<_, _>>()?,
            ),
            other => {
                debug!("Line {}: unsupported directive `{}`. Ignoring.", line.number, other);
                return Ok(None);
            }
        };

        Ok(Some(directive))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum MtlDirective {
    NewMaterial(String),
    Diffuse([f32; 3]),
    Specular([f32; 3]),
    Ambient([f32; 3]),
    Dissolve(f32),
    SpecularExponent(f32),
    DiffuseMap(String),
    BumpMap(String),
}

impl MtlDirective {
    /// Returns `None` for directives the importer does not handle.
    pub(crate) fn lex(line: &Line<'_>) -> Result<Option<Self>, ParseError> {
        let directive = match line.keyword {
            "newmtl" => MtlDirective::NewMaterial(line.remainder()),
            "Kd" => MtlDirective::Diffuse(line.rgb()?),
            "Ks" => MtlDirective::Specular(line.rgb()?),
            "Ka" => MtlDirective::Ambient(line.rgb()?),
            "d" => MtlDirective::Dissolve(line.scalar()?),
            "Ns" => MtlDirective::SpecularExponent(line.scalar()?),
            "map_Kd" => MtlDirective::DiffuseMap(line.remainder()),
            "map_Bump" => MtlDirective::BumpMap(line.remainder()),
            other => {
                debug!("Line {}: unsupported directive `{}`. Ignoring.", line.number, other);
                return Ok(None);
            }
        };

        Ok(Some(directive))
    }
}
