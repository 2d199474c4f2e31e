use rvoip_sip_headers::prelude::*;

fn main() {
    println!("Parsing the headers of an RFC 3261 INVITE");

    let via: Via = "v: SIP/2.0/UDP pc33.atlanta.com;branch=z9hG4bK776asdhds".parse().unwrap();
    println!("{}", via);
    println!("  transport: {:?}, sent-by: {}, branch: {:?}", via.transport(), via.sent_by(), via.branch());

    let mut hops = MaxForwards::from_value("Max-Forwards: 70").unwrap();
    hops.decrement().unwrap();
    println!("{}", hops);

    let to: To = "To: Bob <sip:bob@biloxi.com>".parse().unwrap();
    let mut from: From = "From: Alice <sip:alice@atlanta.com>;tag=1928301774".parse().unwrap();
    println!("{}", to);
    println!("{}  (tag {:?})", from, from.tag());
    let fresh = from.new_tag();
    println!("  new tag: {}", fresh);

    let mut cseq = CSeq::new(314159, "INVITE").unwrap();
    println!("{}", cseq);
    cseq.next();
    println!("  next: {}", cseq);

    let content_type = ContentType::sdp();
    let length = ContentLength::new(142);
    println!("{}\n{}", content_type, length);

    let challenge: WwwAuthenticate =
        "WWW-Authenticate: Digest realm=\"atlanta.com\", nonce=\"84a4cc6f3082121f32b42a2187831a9e\", qop=\"auth\""
            .parse()
            .unwrap();
    println!("{}", challenge);
    println!("  realm: {:?}, nonce: {:?}", challenge.realm(), challenge.nonce());

    match "Max-Forwards: 256".parse::<MaxForwards>() {
        Ok(hops) => println!("unexpected: {}", hops),
        Err(e) => println!("rejected: {}", e),
    }
}
