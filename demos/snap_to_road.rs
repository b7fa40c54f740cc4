//! Walk through distance, slicing, nearest point and snap-to-road on a short
//! street.
//!
//! Run with: cargo run --example snap_to_road

use geosegment::{
    haversine_distance, locate_on_path, polyline_length, slice_path, snap_to_road, GpsPoint,
};

fn main() {
    // Longitude first, as GPS feeds usually deliver it
    let a = GpsPoint::from_lng_lat(106.876024, -6.254066);
    let b = GpsPoint::from_lng_lat(106.875928, -6.254471);

    println!("1. Distance between a and b: {:.2} m\n", haversine_distance(&a, &b));

    let road = vec![
        GpsPoint::from_lng_lat(106.876024, -6.254066),
        GpsPoint::from_lng_lat(106.875928, -6.254471),
        GpsPoint::from_lng_lat(106.875976, -6.254615),
        GpsPoint::from_lng_lat(106.876298, -6.254679),
    ];

    println!("2. Road:");
    for (i, p) in road.iter().enumerate() {
        println!("   Point {}: ({}, {})", i, p.longitude, p.latitude);
    }
    println!("   Length: {:.2} m\n", polyline_length(&road));

    println!("3. Slice from the first to the third point:");
    match slice_path(&road[0], &road[2], &road) {
        Ok(sliced) => {
            for (i, p) in sliced.iter().enumerate() {
                println!("   Point {}: ({}, {})", i, p.longitude, p.latitude);
            }
            println!();
        }
        Err(e) => println!("   Failed: {}\n", e),
    }

    println!("4. Nearest point on the road:");
    let fix = GpsPoint::from_lng_lat(106.875799, -6.254226);
    match locate_on_path(&fix, &road) {
        Ok(nearest) => {
            println!("   Point: ({}, {})", nearest.point.longitude, nearest.point.latitude);
            println!(
                "   Distance: {:.2} m, segment {}, {:.2} m along the road\n",
                nearest.distance_meters, nearest.segment_index, nearest.along_path_meters
            );
        }
        Err(e) => println!("   Failed: {}\n", e),
    }

    println!("5. Snap to road leaving the first stop:");
    let current = GpsPoint::from_lng_lat(106.875928, -6.254471);
    let next = GpsPoint::from_lng_lat(106.876298, -6.254679);
    let to_snap = GpsPoint::from_lng_lat(106.875874, -6.254178);
    match snap_to_road(None, Some(next), Some(current), &to_snap, &road) {
        Ok(snapped) => {
            println!("   Mode: {}", snapped.mode);
            println!("   Point: ({}, {})", snapped.point.longitude, snapped.point.latitude);
            println!("   Distance to road: {:.2} m", snapped.distance_meters);
            println!("   Along road: {:.2} m", snapped.along_path_meters);
        }
        Err(e) => println!("   Failed: {}", e),
    }
}
