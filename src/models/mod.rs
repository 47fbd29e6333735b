// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for review annotations.

pub mod comment;
pub mod drawing;
pub mod identity;
pub mod version;
