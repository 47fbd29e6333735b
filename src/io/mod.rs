// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Durable client-side state: guest profile and review session files.

pub mod profile;
pub mod session;
