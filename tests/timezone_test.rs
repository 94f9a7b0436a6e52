use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Duration, NaiveDate, Offset, TimeZone, Utc};
use chrono_tz::Asia::Tehran as TehranTable;
use jalalify::timezone::{FixedZone, TEHRAN};

fn hash_of(zone: &FixedZone) -> u64 {
    let mut hasher = DefaultHasher::new();
    zone.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_offset_is_constant_across_a_full_year() {
    let expected = TEHRAN.utc_offset();
    for month in 1..=12 {
        let utc = Utc.with_ymd_and_hms(2023, month, 15, 12, 0, 0).unwrap();
        let local = utc.with_timezone(&TEHRAN);
        assert_eq!(local.offset().fix(), expected);
        assert_eq!(TEHRAN.dst_adjustment(), Duration::zero());
    }
}

#[test]
fn test_no_dst_shift_in_the_pre_abolition_era() {
    // IANA Asia/Tehran was +04:30 in the summer of 2021; the fixed zone
    // stays at +03:30 regardless of era.
    let summer = Utc.with_ymd_and_hms(2021, 7, 1, 12, 0, 0).unwrap();
    assert_eq!(summer.with_timezone(&TEHRAN).offset().fix().local_minus_utc(), 12_600);
}

#[test]
fn test_cross_check_against_table_based_tehran() {
    let utc: DateTime<Utc> = "2023-05-03T10:45:36.466402Z".parse().unwrap();

    let fixed = utc.with_timezone(&TEHRAN).format("%Y/%m/%d %H:%M:%S%.6f").to_string();
    let table = utc.with_timezone(&TehranTable).format("%Y/%m/%d %H:%M:%S%.6f").to_string();

    assert_eq!(fixed, "2023/05/03 14:15:36.466402");
    assert_eq!(fixed, table);
}

#[test]
fn test_utc_round_trip_is_lossless_to_microseconds() {
    let utc: DateTime<Utc> = "2023-05-03T10:45:36.466402Z".parse().unwrap();
    let back = utc.with_timezone(&TEHRAN).with_timezone(&Utc);
    assert_eq!(back, utc);
}

#[test]
fn test_localize_maps_wall_clock_to_the_expected_instant() {
    let local = NaiveDate::from_ymd_opt(2023, 5, 3)
        .unwrap()
        .and_hms_micro_opt(14, 15, 36, 466_402)
        .unwrap();
    let instant = TEHRAN.localize(local);
    assert_eq!(instant.naive_local(), local);
    assert_eq!(
        instant.with_timezone(&Utc),
        "2023-05-03T10:45:36.466402Z".parse::<DateTime<Utc>>().unwrap()
    );
}

#[test]
fn test_equality_and_hash_ignore_the_display_name() {
    let named = FixedZone::east(3, 30).unwrap().with_name("Asia/Tehran");
    let anonymous = FixedZone::east(3, 30).unwrap();
    let other = FixedZone::east(4, 30).unwrap();

    assert_eq!(named, anonymous);
    assert_eq!(named, TEHRAN);
    assert_ne!(named, other);
    assert_eq!(hash_of(&named), hash_of(&anonymous));
}

#[test]
fn test_display_renders_signed_hh_mm() {
    assert_eq!(TEHRAN.to_string(), "+03:30");
    assert_eq!(FixedZone::east(-4, -30).unwrap().to_string(), "-04:30");
    assert_eq!(FixedZone::east(0, 0).unwrap().to_string(), "+00:00");
}

#[test]
fn test_time_zone_name_prefers_the_display_name() {
    assert_eq!(TEHRAN.time_zone_name(), "Asia/Tehran");
    assert_eq!(FixedZone::east(3, 30).unwrap().time_zone_name(), "+03:30");
}

#[test]
fn test_out_of_range_offsets_are_rejected() {
    assert!(FixedZone::east(24, 0).is_err());
    assert!(FixedZone::east(3, 90).is_err());
    assert!(FixedZone::east(-24, 0).is_err());
    assert!(FixedZone::east(i32::MAX, 0).is_err());
}

#[test]
fn test_mixed_sign_offset_components_are_rejected() {
    assert!(FixedZone::east(3, -30).is_err());
    assert!(FixedZone::east(-3, 30).is_err());
    // a zero component takes the other's sign
    assert!(FixedZone::east(0, -30).is_ok());
    assert!(FixedZone::east(-3, 0).is_ok());
}
