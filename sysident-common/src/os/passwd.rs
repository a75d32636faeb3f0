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

use std::{ffi::OsString, path::PathBuf};

use log::error;
use nix::unistd::{self, geteuid, Uid};

use crate::ffi::CStrExt;

/// Owned snapshot of one password database entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passwd {
    pub name: String,
    pub passwd: OsString,
    pub uid: u32,
    pub gid: u32,
    pub gecos: OsString,
    pub dir: PathBuf,
    pub shell: PathBuf,
}

impl From<unistd::User> for Passwd {
    fn from(user: unistd::User) -> Self {
        Self {
            name: user.name,
            passwd: user.passwd.to_os_string(),
            uid: user.uid.as_raw(),
            gid: user.gid.as_raw(),
            gecos: user.gecos.to_os_string(),
            dir: user.dir,
            shell: user.shell,
        }
    }
}

impl std::fmt::Display for Passwd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "name:   {}", self.name)?;
        writeln!(f, "passwd: {}", self.passwd.to_string_lossy())?;
        writeln!(f, "uid:    {}", self.uid)?;
        writeln!(f, "gid:    {}", self.gid)?;
        writeln!(f, "gecos:  {}", self.gecos.to_string_lossy())?;
        writeln!(f, "dir:    {}", self.dir.display())?;
        write!(f, "shell:  {}", self.shell.display())?;

        Ok(())
    }
}

pub fn from_uid(uid: Option<Uid>) -> Option<Passwd> {
    let uid = uid.unwrap_or_else(geteuid);

    match unistd::User::from_uid(uid) {
        Ok(user) => user.map(Passwd::from),
        Err(e) => {
            error!(
                "Failed to read user record of uid {}, {}",
                uid,
                e.to_string().to_lowercase()
            );
            None
        }
    }
}

pub fn from_name<S: AsRef<str>>(name: S) -> Option<Passwd> {
    let name = name.as_ref();
    // A name holding an interior nul byte cannot occur in the database
    if name.contains('\0') {
        return None;
    }

    match unistd::User::from_name(name) {
        Ok(user) => user.map(Passwd::from),
        Err(e) => {
            error!(
                "Failed to read user record of '{}', {}",
                name,
                e.to_string().to_lowercase()
            );
            None
        }
    }
}

#[test]
fn test() {
    const UNUSED_UID: u32 = u32::MAX - 3;

    let current = self::from_uid(None).expect("Failed to read current user record");
    println!("{}", current);
    assert!(!current.name.is_empty());
    assert_eq!(current.uid, geteuid().as_raw());

    let by_uid = self::from_uid(Some(Uid::from_raw(current.uid)))
        .expect("Failed to read user record by uid");
    assert_eq!(by_uid, current);

    let by_name = self::from_name(&current.name).expect("Failed to read user record by name");
    assert_eq!(by_name, current);

    assert_eq!(self::from_uid(Some(Uid::from_raw(UNUSED_UID))), None);
    assert_eq!(self::from_name("no\0body"), None);
}

#[test]
fn test_format() {
    let record = Passwd {
        name: String::from("root"),
        passwd: OsString::from("x"),
        uid: 0,
        gid: 0,
        gecos: OsString::from("root"),
        dir: PathBuf::from("/root"),
        shell: PathBuf::from("/bin/bash"),
    };

    assert_eq!(
        record.to_string(),
        "name:   root\n\
         passwd: x\n\
         uid:    0\n\
         gid:    0\n\
         gecos:  root\n\
         dir:    /root\n\
         shell:  /bin/bash"
    );
}
