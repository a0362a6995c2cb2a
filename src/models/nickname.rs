// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fixed pool of nicknames handed out to new users.

use rand::seq::SliceRandom;

pub const NICKNAMES: &[&str] = &[
    "초록지구",
    "푸른바다",
    "맑은하늘",
    "새싹지킴이",
    "북극곰친구",
    "나무심는사람",
    "분리수거왕",
    "절약하는펭귄",
    "햇살가득",
    "바람개비",
    "꿀벌구조대",
    "자전거타는곰",
];

/// Pick a nickname uniformly from [`NICKNAMES`].
pub fn random_nickname() -> &'static str {
    NICKNAMES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(NICKNAMES[0])
}
