// SPDX-License-Identifier: MPL-2.0
//! Compiled-in event definition used when no config file is present.

use crate::invite::deeplink::RsvpTarget;
use crate::invite::song::Song;

pub const TITLE: &str = "Beach Birthday Bash! 🎉";
pub const SUBTITLE: &str = "Join us in celebrating Lin Latt That Sinn's Birthday!!!";
pub const SCHEDULE: &str = "Sunday, April 7th, 2025 • 12:00 PM - 2:00 PM";
pub const VENUE_NAME: &str = "Hot Pot Country, South Okkalapa";
pub const GIFT_LINE: &str = "Your presence is the best gift!";
pub const BLURB: &str = "Join us for a celebration with delicious hot pot and wonderful \
                         company! Feel the breeze while we celebrate from noon until 2 PM!";

/// Event start in `%Y-%m-%dT%H:%M:%S` local time.
pub const STARTS_AT: &str = "2025-04-07T12:00:00";

pub const LATITUDE: f64 = 16.8507;
pub const LONGITUDE: f64 = 96.1683;
pub const DIRECTIONS_URL: &str = "https://maps.app.goo.gl/4cp52bKzrD6YFgbn9";

pub fn rsvp() -> RsvpTarget {
    RsvpTarget {
        scheme: "viber".to_string(),
        number: "+959977123546".to_string(),
        message: "Hey Happy Birthday babe! I am coming🥳".to_string(),
    }
}

pub fn songs() -> Vec<Song> {
    vec![
        Song::new(
            "Beach Boys - Kokomo",
            "https://www.youtube.com/watch?v=9_5_AD9wXuY",
        ),
        Song::new(
            "Jack Johnson - Better Together",
            "https://www.youtube.com/watch?v=u57d4_b_YgI",
        ),
        Song::new(
            "Bob Marley - Three Little Birds",
            "https://www.youtube.com/watch?v=zaGUr6wzyT8",
        ),
        Song::new(
            "Kenny Chesney - No Shoes, No Shirt, No Problems",
            "https://www.youtube.com/watch?v=HwgI9PBZVlI",
        ),
    ]
}
