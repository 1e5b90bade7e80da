/*
 * A high-performance chess library licensed under the LGPLv3.
 * Copyright (C) 2025 Clifton Toaster Reid
 *
 * This library is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Lesser General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This library is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Lesser General Public License for more details.
 *
 * You should have received a copy of the GNU Lesser General Public License
 * along with this library. If not, see <https://opensource.org/license/lgpl-3-0>.
 */

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Reason a FEN string failed to parse or validate.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FenErrorReason {
  WrongFieldCount,
  InvalidRankCount,
  InvalidRankLength,
  InvalidPieceChar,
  UnterminatedStack,
  EmptyStack,
  InvalidTurnChar,
  InvalidHalfmoveClock,
  InvalidFullmoveNumber,
  InvalidDeploySuffix,
  TwoCommandersSameColor,
  MissingCommander,
}

/// Why a combination (stacking) attempt failed.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum StackErrorKind {
  CarrierIncompatible,
  SlotFull,
  ColorMismatch,
}

/// Why a deploy-session action was rejected.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DeployErrorKind {
  NotActive,
  WrongStack,
  NonRecombinable,
}

/// The closed error taxonomy returned by every fallible public operation.
/// No public method panics on bad input; every failure surfaces as one of
/// these named variants.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum CoTuLenhError {
  InvalidFen { reason: FenErrorReason, location: usize },
  IllegalMove { reason: String },
  AmbiguousMove { candidates: Vec<String> },
  IllegalPlacement { reason: String },
  StackError { kind: StackErrorKind },
  DeployError { kind: DeployErrorKind },
  InvariantViolation { detail: String },
}

impl fmt::Display for CoTuLenhError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      CoTuLenhError::InvalidFen { reason, location } => {
        write!(f, "invalid FEN at {location}: {reason:?}")
      }
      CoTuLenhError::IllegalMove { reason } => write!(f, "illegal move: {reason}"),
      CoTuLenhError::AmbiguousMove { candidates } => {
        write!(f, "ambiguous move, {} candidates", candidates.len())
      }
      CoTuLenhError::IllegalPlacement { reason } => write!(f, "illegal placement: {reason}"),
      CoTuLenhError::StackError { kind } => write!(f, "stack error: {kind:?}"),
      CoTuLenhError::DeployError { kind } => write!(f, "deploy error: {kind:?}"),
      CoTuLenhError::InvariantViolation { detail } => write!(f, "invariant violation: {detail}"),
    }
  }
}

#[cfg(feature = "std")]
impl std::error::Error for CoTuLenhError {}

pub type CoTuLenhResult<T> = Result<T, CoTuLenhError>;
