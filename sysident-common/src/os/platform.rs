// SPDX-License-Identifier: Mulan PSL v2
/*
 * Copyright (c) 2024 Huawei Technologies Co., Ltd.
 * sysident-common is licensed under Mulan PSL v2.
 * You can use this software according to the terms and conditions of the Mulan PSL v2.
 * You may obtain a copy of Mulan PSL v2 at:
 *         http://license.coscl.org.cn/MulanPSL2
 *
 * THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
 * EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
 * MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
 * See the Mulan PSL v2 for more details.
 */

use std::ffi::OsString;

use log::error;
use nix::sys::utsname::uname;

/// Owned snapshot of the kernel host identification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    pub sysname: OsString,
    pub nodename: OsString,
    pub release: OsString,
    pub version: OsString,
    pub machine: OsString,
}

impl std::fmt::Display for HostInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "sysname:  {}", self.sysname.to_string_lossy())?;
        writeln!(f, "nodename: {}", self.nodename.to_string_lossy())?;
        writeln!(f, "release:  {}", self.release.to_string_lossy())?;
        writeln!(f, "version:  {}", self.version.to_string_lossy())?;
        write!(f, "machine:  {}", self.machine.to_string_lossy())?;

        Ok(())
    }
}

pub fn host_info() -> Option<HostInfo> {
    match uname() {
        Ok(info) => Some(HostInfo {
            sysname: info.sysname().to_os_string(),
            nodename: info.nodename().to_os_string(),
            release: info.release().to_os_string(),
            version: info.version().to_os_string(),
            machine: info.machine().to_os_string(),
        }),
        Err(e) => {
            error!(
                "Failed to read host identification, {}",
                e.to_string().to_lowercase()
            );
            None
        }
    }
}

#[test]
fn test() {
    let info = self::host_info().expect("Failed to read host identification");
    println!("{}", info);

    assert!(!info.sysname.is_empty());
    assert!(!info.nodename.is_empty());
    assert!(!info.release.is_empty());
    assert!(!info.version.is_empty());
    assert!(!info.machine.is_empty());
}
