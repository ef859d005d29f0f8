#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const CHICAGO: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1,2017-01-01 09:07:57,2017-01-01 09:20:53,776,Canal St & Adams St,Clinton St & Madison St,Subscriber,Male,1992.0
2,2017-01-02 09:15:00,2017-01-02 09:25:00,600,Canal St & Adams St,Clinton St & Madison St,Subscriber,Female,1985.0
3,2017-01-02 17:40:00,2017-01-02 17:55:00,900,Streeter Dr & Grand Ave,Lake Shore Dr & Monroe St,Customer,,
4,2017-02-14 08:05:00,2017-02-14 08:20:00,900,Canal St & Adams St,Lake Shore Dr & Monroe St,Subscriber,Male,1985.0
";

pub const WASHINGTON: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1,2017-03-03 07:00:00,2017-03-03 07:10:00,600.5,15th & P St NW,14th & V St NW,Subscriber
2,2017-03-04 12:00:00,2017-03-04 12:30:00,1800.0,Jefferson Dr & 14th St SW,15th & P St NW,Customer
";

pub fn bikeshare() -> Command {
    cargo_bin_cmd!("bikeshare")
}

/// Fresh data directory with the Chicago and Washington fixtures.
pub fn setup_data_dir(name: &str) -> String {
    let mut dir: PathBuf = env::temp_dir();
    dir.push(format!("{}_bikeshare_data", name));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create data dir");
    fs::write(dir.join("chicago.csv"), CHICAGO).expect("write chicago.csv");
    fs::write(dir.join("washington.csv"), WASHINGTON).expect("write washington.csv");
    dir.to_string_lossy().to_string()
}

/// Config path that does not exist yet, so defaults apply.
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bikeshare.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Command with isolated config and data directory.
pub fn isolated(name: &str) -> Command {
    let data = setup_data_dir(name);
    let conf = temp_config(name);
    let mut cmd = bikeshare();
    cmd.args(["--config", &conf, "--data-dir", &data]);
    cmd
}
