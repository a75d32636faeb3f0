// SPDX-License-Identifier: Mulan PSL v2
/*
 * Copyright (c) 2024 Huawei Technologies Co., Ltd.
 * sysident is licensed under Mulan PSL v2.
 * You can use this software according to the terms and conditions of the Mulan PSL v2.
 * You may obtain a copy of Mulan PSL v2 at:
 *         http://license.coscl.org.cn/MulanPSL2
 *
 * THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
 * EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
 * MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
 * See the Mulan PSL v2 for more details.
 */

use clap::{AppSettings, ColorChoice, Parser, Subcommand};

use super::{CLI_ABOUT, CLI_NAME, CLI_VERSION};

#[derive(Parser, Debug)]
#[clap(
    bin_name = CLI_NAME,
    version = CLI_VERSION,
    about = CLI_ABOUT,
    arg_required_else_help(true),
    color(ColorChoice::Never),
    disable_help_subcommand(true),
    global_setting(AppSettings::DeriveDisplayOrder),
    term_width(120),
)]
pub struct Arguments {
    /// Command name
    #[clap(subcommand)]
    pub subcommand: SubCommand,

    /// Provide more detailed info
    #[clap(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum SubCommand {
    /// Show a user record from the password database
    Passwd {
        /// User id (defaults to the current effective uid)
        #[clap(short, long, conflicts_with = "name")]
        uid: Option<u32>,
        /// User name
        #[clap(short, long)]
        name: Option<String>,
    },
    /// Show a group record from the group database
    Group {
        /// Group id (defaults to the current effective gid)
        #[clap(short, long, conflicts_with = "name")]
        gid: Option<u32>,
        /// Group name
        #[clap(short, long)]
        name: Option<String>,
    },
    /// Show host identification
    Uname,
}

impl Arguments {
    pub fn new() -> Self {
        Self::parse()
    }
}

impl std::fmt::Display for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:?}", self))
    }
}
