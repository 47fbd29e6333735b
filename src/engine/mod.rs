// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation engine: the UI-independent logic of the review tool.

pub mod access;
pub mod matcher;
pub mod range;
pub mod store;
pub mod stroke;
pub mod threads;
