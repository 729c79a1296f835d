fn main() {
    peopledesk_frontend::start();
}
