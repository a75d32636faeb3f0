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

use anyhow::{Context, Result};
use flexi_logger::{LogSpecification, Logger, WriteMode};
use log::{debug, info, LevelFilter};
use nix::unistd::{Gid, Uid};

use sysident_common::os;

mod args;

use self::args::{Arguments, SubCommand};

pub const CLI_NAME: &str = env!("CARGO_PKG_NAME");
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CLI_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

fn show_passwd(uid: Option<u32>, name: Option<String>) -> Result<()> {
    let record = match name {
        Some(name) => os::passwd::from_name(&name)
            .with_context(|| format!("Cannot find user '{}'", name))?,
        None => os::passwd::from_uid(uid.map(Uid::from_raw)).with_context(|| match uid {
            Some(uid) => format!("Cannot find user record of uid {}", uid),
            None => String::from("Cannot find user record of current user"),
        })?,
    };
    info!("{}", record);

    Ok(())
}

fn show_group(gid: Option<u32>, name: Option<String>) -> Result<()> {
    let record = match name {
        Some(name) => os::group::from_name(&name)
            .with_context(|| format!("Cannot find group '{}'", name))?,
        None => os::group::from_gid(gid.map(Gid::from_raw)).with_context(|| match gid {
            Some(gid) => format!("Cannot find group record of gid {}", gid),
            None => String::from("Cannot find group record of current group"),
        })?,
    };
    info!("{}", record);

    Ok(())
}

fn show_host_info() -> Result<()> {
    let info = os::platform::host_info().context("Failed to read host identification")?;
    info!("{}", info);

    Ok(())
}

fn main() -> Result<()> {
    // Parse arguments
    let args = Arguments::new();

    // Initialize logger
    let max_log_level = if args.verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Info
    };
    let log_spec = LogSpecification::builder().default(max_log_level).build();
    let _ = Logger::with(log_spec)
        .log_to_stdout()
        .format(|w, _, record| write!(w, "{}", record.args()))
        .write_mode(WriteMode::Direct)
        .start()
        .context("Failed to initialize logger")?;

    debug!("Start with {:#?}", args);
    match args.subcommand {
        SubCommand::Passwd { uid, name } => show_passwd(uid, name),
        SubCommand::Group { gid, name } => show_group(gid, name),
        SubCommand::Uname => show_host_info(),
    }
}
