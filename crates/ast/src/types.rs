/*
 * Copyright (c) 2026. Mikhail Kulik.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Storage types. Every type has a byte width fixed at construction; array
//! widths are the product of their bound and their element width.

use std::fmt;
use thiserror::Error;

/// Raised when an array dimension is zero, negative, or too large to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("array bound must be a positive size, got {0}")]
pub struct InvalidArrayBound(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Basic {
    Int,
    Float,
    Char,
    Bool,
}

impl Basic {
    pub fn width(self) -> u64 {
        match self {
            Basic::Int => 4,
            Basic::Float => 8,
            Basic::Char | Basic::Bool => 1,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Basic::Int => "int",
            Basic::Float => "float",
            Basic::Char => "char",
            Basic::Bool => "bool",
        }
    }

    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "int" => Some(Basic::Int),
            "float" => Some(Basic::Float),
            "char" => Some(Basic::Char),
            "bool" => Some(Basic::Bool),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Basic(Basic),
    Array(ArrayType),
}

impl Type {
    pub const INT: Type = Type::Basic(Basic::Int);
    pub const FLOAT: Type = Type::Basic(Basic::Float);
    pub const CHAR: Type = Type::Basic(Basic::Char);
    pub const BOOL: Type = Type::Basic(Basic::Bool);

    pub fn width(&self) -> u64 {
        match self {
            Type::Basic(basic) => basic.width(),
            Type::Array(array) => array.width(),
        }
    }

    /// The type one subscript away, or `None` for a non-array.
    pub fn element(&self) -> Option<&Type> {
        match self {
            Type::Array(array) => Some(array.of()),
            Type::Basic(_) => None,
        }
    }

    /// Result type of an arithmetic operator applied to `a` and `b`.
    /// `float` wins over everything else; any other mix yields `int`.
    pub fn max(a: &Type, b: &Type) -> Type {
        if *a == Type::FLOAT || *b == Type::FLOAT {
            Type::FLOAT
        } else {
            Type::INT
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Basic(basic) => f.write_str(basic.keyword()),
            Type::Array(array) => write!(f, "[{}] {}", array.size(), array.of()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayType {
    size: u64,
    of: Box<Type>,
    width: u64,
}

impl ArrayType {
    pub fn new(size: i64, of: Type) -> Result<Self, InvalidArrayBound> {
        if size <= 0 {
            return Err(InvalidArrayBound(size));
        }
        // Widths stay within i64 so they can be emitted as integer constants.
        let width = i64::try_from(of.width())
            .ok()
            .and_then(|elem| elem.checked_mul(size))
            .ok_or(InvalidArrayBound(size))?;
        Ok(Self {
            size: size as u64,
            of: Box::new(of),
            width: width as u64,
        })
    }

    /// Number of elements in this dimension.
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn of(&self) -> &Type {
        &self.of
    }

    pub fn width(&self) -> u64 {
        self.width
    }
}
