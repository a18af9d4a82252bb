// Copyright (c) 2026 Parapet contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.
