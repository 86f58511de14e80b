//! Small city datasets written to a temp dir, shaped like the real exports.

use anyhow::Result;
use std::fs;
use tempfile::TempDir;

use crate::config::Config;
use crate::data::CityRegistry;

pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1423854,2017-01-01 08:15:00,2017-01-01 08:25:00,600,Canal St & Adams St,Clinton St & Madison St,Subscriber,Male,1985.0
955915,2017-01-02 08:30:00,2017-01-02 08:35:00,300,Canal St & Adams St,Clinton St & Madison St,Subscriber,Female,1990.0
9031,2017-01-02 17:45:00,2017-01-02 18:00:00,900,Streeter Dr & Grand Ave,Canal St & Adams St,Customer,,
304487,2017-01-03 08:05:00,2017-01-03 08:25:00,1200,Canal St & Adams St,Streeter Dr & Grand Ave,Subscriber,Male,1990.0
45207,2017-02-06 12:00:00,2017-02-06 12:07:30,450,Clinton St & Madison St,Streeter Dr & Grand Ave,Customer,Female,1975.0
1473887,2017-03-06 08:10:00,2017-03-06 08:21:40,700,Clinton St & Madison St,Canal St & Adams St,Subscriber,Male,1990.0
961916,2017-06-05 19:20:00,2017-06-05 19:25:50,350,Streeter Dr & Grand Ave,Clinton St & Madison St,Subscriber,Female,2000.0
";

pub const NEW_YORK_CITY_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
5688089,2017-06-11 14:55:05,2017-06-11 15:08:21,795,Suffolk St & Stanton St,W Broadway & Spring St,Subscriber,Male,1998.0
4096714,2017-05-11 15:30:11,2017-05-11 15:41:43,692,Lexington Ave & E 63 St,1 Ave & E 78 St,Subscriber,Female,1981.0
";

pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
482740,2017-03-11 10:40:00,2017-03-11 10:46:00,402.549,Yuma St & Tenley Circle NW,Connecticut Ave & Yuma St NW,Subscriber
1330037,2017-05-30 01:02:59,2017-05-30 01:13:37,637.251,17th St & Massachusetts Ave NW,5th & K St NW,Customer
";

/// Temp data dir holding all three cities, plus a config pointing at it.
pub fn datasets() -> Result<(TempDir, Config)> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("chicago.csv"), CHICAGO_CSV)?;
    fs::write(dir.path().join("new_york_city.csv"), NEW_YORK_CITY_CSV)?;
    fs::write(dir.path().join("washington.csv"), WASHINGTON_CSV)?;
    let cfg = Config {
        data_dir: dir.path().to_path_buf(),
        ..Config::default()
    };
    Ok((dir, cfg))
}

pub fn registry() -> Result<(TempDir, CityRegistry)> {
    let (dir, cfg) = datasets()?;
    Ok((dir, CityRegistry::from_config(&cfg)))
}
